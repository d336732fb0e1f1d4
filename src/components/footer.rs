use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p class="footer__copyright">{"© 2021 Mesto Russia"}</p>
        </footer>
    }
}
