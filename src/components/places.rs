use yew::prelude::*;

use crate::components::card::CardView;
use crate::models::{Card, CurrentUser};

#[derive(Properties, PartialEq)]
pub struct PlacesProps {
    pub cards: Vec<Card>,
    pub on_card_like: Callback<Card>,
    pub on_card_delete: Callback<Card>,
    pub on_card_click: Callback<Card>,
    pub on_edit_avatar: Callback<()>,
    pub on_edit_profile: Callback<()>,
    pub on_add_place: Callback<()>,
}

/// Profile block followed by the card feed.
#[function_component(Places)]
pub fn places(props: &PlacesProps) -> Html {
    let user = use_context::<CurrentUser>().unwrap_or_default();

    let edit_avatar = props.on_edit_avatar.reform(|_: MouseEvent| ());
    let edit_profile = props.on_edit_profile.reform(|_: MouseEvent| ());
    let add_place = props.on_add_place.reform(|_: MouseEvent| ());

    html! {
        <main class="content">
            <section class="profile">
                <div
                    class="profile__avatar"
                    style={format!("background-image: url({})", user.avatar_url)}
                    onclick={edit_avatar}
                ></div>
                <div class="profile__info">
                    <h1 class="profile__name">{user.name.clone()}</h1>
                    <button type="button" class="profile__edit-button" aria-label="Редактировать" onclick={edit_profile}></button>
                    <p class="profile__about">{user.about.clone()}</p>
                </div>
                <button type="button" class="profile__add-button" aria-label="Добавить" onclick={add_place}></button>
            </section>
            <section class="places">
                <ul class="places__list">
                    {
                        props.cards.iter().map(|card| {
                            html! {
                                <CardView
                                    key={card.id.0.clone()}
                                    card={card.clone()}
                                    on_card_click={props.on_card_click.clone()}
                                    on_card_like={props.on_card_like.clone()}
                                    on_card_delete={props.on_card_delete.clone()}
                                />
                            }
                        }).collect::<Html>()
                    }
                </ul>
            </section>
        </main>
    }
}
