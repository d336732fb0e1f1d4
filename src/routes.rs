use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::auth::{Login, Register};
use crate::config::AuthConfig;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sign-in")]
    SignIn,
    #[at("/sign-up")]
    SignUp,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Picks the page for `route`. `home` is the already rendered feed page.
pub fn switch(route: &Route, home: Html, auth: AuthConfig) -> Html {
    match route {
        Route::Home if auth.logged_in => home,
        Route::Home => html! { <Redirect<Route> to={Route::SignIn}/> },
        Route::SignIn => html! { <Login/> },
        Route::SignUp => html! { <Register/> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home}/> },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::SignIn.to_path(), "/sign-in");
        assert_eq!(Route::SignUp.to_path(), "/sign-up");
    }

    #[test]
    fn matches_auth_pages() {
        let params = HashMap::new();
        assert_eq!(Route::from_path("/sign-in", &params), Some(Route::SignIn));
        assert_eq!(Route::from_path("/sign-up", &params), Some(Route::SignUp));
        assert_eq!(Route::from_path("/", &params), Some(Route::Home));
    }
}
