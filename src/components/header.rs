use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <Link<Route> to={Route::Home} classes={classes!("header__logo-link")}>
                <div class="header__logo" aria-label="Место"></div>
            </Link<Route>>
            <Link<Route> to={Route::SignIn} classes={classes!("header__link")}>
                {"Войти"}
            </Link<Route>>
        </header>
    }
}
