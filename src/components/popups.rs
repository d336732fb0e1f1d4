use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{AvatarUpdate, Card, CurrentUser, NewCard, ProfileUpdate};

#[derive(Properties, PartialEq)]
pub struct PopupWithFormProps {
    pub name: &'static str,
    pub title: &'static str,
    pub is_open: bool,
    pub button_caption: &'static str,
    pub on_close: Callback<()>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Modal frame shared by every form popup.
#[function_component(PopupWithForm)]
pub fn popup_with_form(props: &PopupWithFormProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());
    let submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: FocusEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class={classes!("popup", format!("popup_type_{}", props.name), props.is_open.then(|| "popup_opened"))}>
            <div class="popup__container">
                <button type="button" class="popup__close-button" aria-label="Закрыть" onclick={close}></button>
                <h2 class="popup__title">{props.title}</h2>
                <form class="popup__form" name={props.name} onsubmit={submit}>
                    { for props.children.iter() }
                    <button type="submit" class="popup__save-button">{props.button_caption}</button>
                </form>
            </div>
        </div>
    }
}

fn text_setter(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[derive(Properties, PartialEq)]
pub struct EditProfilePopupProps {
    pub is_open: bool,
    pub button_caption: &'static str,
    pub on_close: Callback<()>,
    pub on_update_user: Callback<ProfileUpdate>,
}

#[function_component(EditProfilePopup)]
pub fn edit_profile_popup(props: &EditProfilePopupProps) -> Html {
    let user = use_context::<CurrentUser>().unwrap_or_default();
    let name = use_state(String::new);
    let about = use_state(String::new);

    // Reopening the form starts again from the saved profile.
    {
        let name = name.clone();
        let about = about.clone();
        use_effect_with_deps(
            move |(user, _)| {
                name.set(user.name.clone());
                about.set(user.about.clone());
                || ()
            },
            (user, props.is_open),
        );
    }

    let on_submit = {
        let name = name.clone();
        let about = about.clone();
        props.on_update_user.reform(move |_: ()| ProfileUpdate {
            name: (*name).clone(),
            about: (*about).clone(),
        })
    };

    html! {
        <PopupWithForm
            name="edit-profile"
            title="Редактировать профиль"
            is_open={props.is_open}
            button_caption={props.button_caption}
            on_close={props.on_close.clone()}
            on_submit={on_submit}
        >
            <input
                class="popup__input" type="text" name="name" placeholder="Имя"
                required=true minlength="2" maxlength="40"
                value={(*name).clone()} oninput={text_setter(&name)}
            />
            <input
                class="popup__input" type="text" name="about" placeholder="О себе"
                required=true minlength="2" maxlength="200"
                value={(*about).clone()} oninput={text_setter(&about)}
            />
        </PopupWithForm>
    }
}

#[derive(Properties, PartialEq)]
pub struct AddPlacePopupProps {
    pub is_open: bool,
    pub button_caption: &'static str,
    pub on_close: Callback<()>,
    pub on_add_place: Callback<NewCard>,
}

#[function_component(AddPlacePopup)]
pub fn add_place_popup(props: &AddPlacePopupProps) -> Html {
    let title = use_state(String::new);
    let link = use_state(String::new);

    {
        let title = title.clone();
        let link = link.clone();
        use_effect_with_deps(
            move |is_open| {
                if *is_open {
                    title.set(String::new());
                    link.set(String::new());
                }
                || ()
            },
            props.is_open,
        );
    }

    let on_submit = {
        let title = title.clone();
        let link = link.clone();
        props.on_add_place.reform(move |_: ()| NewCard {
            title: title.trim().to_string(),
            link: link.trim().to_string(),
        })
    };

    html! {
        <PopupWithForm
            name="add-place"
            title="Новое место"
            is_open={props.is_open}
            button_caption={props.button_caption}
            on_close={props.on_close.clone()}
            on_submit={on_submit}
        >
            <input
                class="popup__input" type="text" name="title" placeholder="Название"
                required=true minlength="2" maxlength="30"
                value={(*title).clone()} oninput={text_setter(&title)}
            />
            <input
                class="popup__input" type="url" name="link" placeholder="Ссылка на картинку"
                required=true
                value={(*link).clone()} oninput={text_setter(&link)}
            />
        </PopupWithForm>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditAvatarPopupProps {
    pub is_open: bool,
    pub button_caption: &'static str,
    pub on_close: Callback<()>,
    pub on_update_avatar: Callback<AvatarUpdate>,
}

#[function_component(EditAvatarPopup)]
pub fn edit_avatar_popup(props: &EditAvatarPopupProps) -> Html {
    let avatar_input = use_node_ref();

    {
        let avatar_input = avatar_input.clone();
        use_effect_with_deps(
            move |is_open| {
                if *is_open {
                    if let Some(input) = avatar_input.cast::<HtmlInputElement>() {
                        input.set_value("");
                    }
                }
                || ()
            },
            props.is_open,
        );
    }

    let on_submit = {
        let avatar_input = avatar_input.clone();
        let on_update_avatar = props.on_update_avatar.clone();
        Callback::from(move |_: ()| {
            if let Some(input) = avatar_input.cast::<HtmlInputElement>() {
                on_update_avatar.emit(AvatarUpdate {
                    avatar: input.value().trim().to_string(),
                });
            }
        })
    };

    html! {
        <PopupWithForm
            name="edit-avatar"
            title="Обновить аватар"
            is_open={props.is_open}
            button_caption={props.button_caption}
            on_close={props.on_close.clone()}
            on_submit={on_submit}
        >
            <input
                ref={avatar_input}
                class="popup__input" type="url" name="avatar" placeholder="Ссылка на картинку"
                required=true
            />
        </PopupWithForm>
    }
}

#[derive(Properties, PartialEq)]
pub struct DeleteConfirmPopupProps {
    pub card: Option<Card>,
    pub button_caption: &'static str,
    pub on_close: Callback<()>,
    pub on_delete: Callback<Card>,
}

#[function_component(DeleteConfirmPopup)]
pub fn delete_confirm_popup(props: &DeleteConfirmPopupProps) -> Html {
    let on_submit = {
        let card = props.card.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: ()| {
            if let Some(card) = &card {
                on_delete.emit(card.clone());
            }
        })
    };

    html! {
        <PopupWithForm
            name="delete-confirm"
            title="Вы уверены?"
            is_open={props.card.is_some()}
            button_caption={props.button_caption}
            on_close={props.on_close.clone()}
            on_submit={on_submit}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct ImagePopupProps {
    pub card: Option<Card>,
    pub on_close: Callback<()>,
}

#[function_component(ImagePopup)]
pub fn image_popup(props: &ImagePopupProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());
    let (src, title) = props
        .card
        .as_ref()
        .map(|card| (card.image_url.clone(), card.title.clone()))
        .unwrap_or_default();

    html! {
        <div class={classes!("popup", "popup_type_image", props.card.is_some().then(|| "popup_opened"))}>
            <figure class="popup__figure">
                <button type="button" class="popup__close-button" aria-label="Закрыть" onclick={close}></button>
                <img class="popup__image" src={src} alt={title.clone()}/>
                <figcaption class="popup__caption">{title}</figcaption>
            </figure>
        </div>
    }
}
