use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::Credentials;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
struct AuthFormProps {
    title: &'static str,
    submit_label: &'static str,
    on_submit: Option<Callback<Credentials>>,
    #[prop_or_default]
    children: Children,
}

#[function_component(AuthForm)]
fn auth_form(props: &AuthFormProps) -> Html {
    let email_input = use_node_ref();
    let password_input = use_node_ref();

    let submit = {
        let email_input = email_input.clone();
        let password_input = password_input.clone();
        let on_submit = props.on_submit.clone();
        let title = props.title;
        Callback::from(move |e: FocusEvent| {
            e.prevent_default();
            let (Some(email), Some(password)) = (
                email_input.cast::<HtmlInputElement>(),
                password_input.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let credentials = Credentials {
                email: email.value(),
                password: password.value(),
            };
            match &on_submit {
                Some(on_submit) => on_submit.emit(credentials),
                None => log::info!("{}: no auth backend for {}", title, credentials.email),
            }
        })
    };

    html! {
        <section class="auth">
            <h2 class="auth__header">{props.title}</h2>
            <form class="auth__form" onsubmit={submit}>
                <input ref={email_input} class="auth__input" placeholder="Email" type="email" required=true/>
                <input ref={password_input} class="auth__input" placeholder="Пароль" type="password" required=true/>
                <button type="submit" class="auth__submit-button">{props.submit_label}</button>
            </form>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    #[prop_or_default]
    pub on_login: Option<Callback<Credentials>>,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    html! {
        <AuthForm title="Вход" submit_label="Войти" on_submit={props.on_login.clone()}/>
    }
}

#[derive(Properties, PartialEq)]
pub struct RegisterProps {
    #[prop_or_default]
    pub on_register: Option<Callback<Credentials>>,
}

#[function_component(Register)]
pub fn register(props: &RegisterProps) -> Html {
    html! {
        <AuthForm title="Регистрация" submit_label="Зарегистрироваться" on_submit={props.on_register.clone()}>
            <span class="auth__caption">
                {"Уже зарегистрированы? "}
                <Link<Route> to={Route::SignIn} classes={classes!("auth__caption", "auth__caption_type_link")}>
                    {"Войти"}
                </Link<Route>>
            </span>
        </AuthForm>
    }
}
