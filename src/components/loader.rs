use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub is_visible: bool,
    pub image: &'static str,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    html! {
        <div class={classes!("loader", props.is_visible.then(|| "loader_visible"))}>
            <img class="loader__image" src={props.image} alt="Загрузка"/>
        </div>
    }
}
