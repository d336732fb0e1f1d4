use yew::prelude::*;

use crate::models::{Card, CurrentUser};

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub card: Card,
    pub on_card_click: Callback<Card>,
    pub on_card_like: Callback<Card>,
    pub on_card_delete: Callback<Card>,
}

#[function_component(CardView)]
pub fn card_view(props: &CardProps) -> Html {
    let user = use_context::<CurrentUser>().unwrap_or_default();
    let card = &props.card;
    let is_liked = card.is_liked_by(&user.id);
    let is_own = card.is_owned_by(&user.id);

    let on_click = {
        let card = card.clone();
        props.on_card_click.reform(move |_: MouseEvent| card.clone())
    };
    let on_like = {
        let card = card.clone();
        props.on_card_like.reform(move |_: MouseEvent| card.clone())
    };
    let on_delete = {
        let card = card.clone();
        props.on_card_delete.reform(move |_: MouseEvent| card.clone())
    };

    html! {
        <li class="card">
            <img class="card__image" src={card.image_url.clone()} alt={card.title.clone()} onclick={on_click}/>
            if is_own {
                <button type="button" class="card__delete-button" aria-label="Удалить" onclick={on_delete}></button>
            }
            <div class="card__description">
                <h2 class="card__title">{card.title.clone()}</h2>
                <div class="card__like-container">
                    <button
                        type="button"
                        class={classes!("card__like-button", is_liked.then(|| "card__like-button_active"))}
                        aria-label="Нравится"
                        onclick={on_like}
                    ></button>
                    <span class="card__like-counter">{card.like_count()}</span>
                </div>
            </div>
        </li>
    }
}
