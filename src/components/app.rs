use std::rc::Rc;

use futures::join;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::components::places::Places;
use crate::components::popups::{
    AddPlacePopup, DeleteConfirmPopup, EditAvatarPopup, EditProfilePopup, ImagePopup,
};
use crate::config::{ApiConfig, AuthConfig};
use crate::models::user::LOADING_AVATAR;
use crate::models::{AvatarUpdate, Card, CardId, CurrentUser, NewCard, ProfileUpdate, User};
use crate::routes::{self, Route};
use crate::services::{notify, Api, ApiResult};
use crate::state::{AppState, Submission};

pub enum Msg {
    Loaded {
        user: ApiResult<User>,
        cards: ApiResult<Vec<Card>>,
    },
    CardClick(Card),
    CardLike(Card),
    CardLikeSettled {
        card_id: CardId,
        result: ApiResult<Card>,
    },
    CardDelete(Card),
    Delete(Card),
    DeleteSettled {
        card_id: CardId,
        result: ApiResult<()>,
    },
    EditProfileClick,
    AddPlaceClick,
    EditAvatarClick,
    CloseAllPopups,
    UpdateUser(ProfileUpdate),
    UpdateAvatar(AvatarUpdate),
    UserSettled(ApiResult<User>),
    AddPlaceSubmit(NewCard),
    AddPlaceSettled(ApiResult<Card>),
}

/// Root component. Owns the view state and talks to the API on behalf of
/// every child.
pub struct App {
    api: Api,
    auth: AuthConfig,
    state: AppState,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let api = Api::new(ApiConfig::from_env());

        let link = ctx.link().clone();
        let loader = api.clone();
        spawn_local(async move {
            let (user, cards) = join!(loader.get_user_info(), loader.get_initial_cards());
            link.send_message(Msg::Loaded { user, cards });
        });

        Self {
            api,
            auth: AuthConfig::default(),
            state: AppState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded { user, cards } => {
                let errors = self.state.finish_initial_load(user, cards);
                notify::report_all(&errors);
                log::info!("feed loaded with {} cards", self.state.cards.len());
                true
            }
            Msg::CardClick(card) => {
                self.state.select_card(card);
                true
            }
            Msg::CardLike(card) => {
                let api = self.api.clone();
                let request = self.state.like_request(&card);
                ctx.link().send_future(async move {
                    let result = api.set_like(request, &card.id).await;
                    Msg::CardLikeSettled {
                        card_id: card.id,
                        result,
                    }
                });
                false
            }
            Msg::CardLikeSettled { card_id, result } => {
                if let Err(e) = self.state.finish_card_like(&card_id, result) {
                    notify::report(&e);
                    return false;
                }
                true
            }
            Msg::CardDelete(card) => {
                self.state.request_delete(card);
                true
            }
            Msg::Delete(card) => {
                if !self.state.begin(Submission::DeleteCard(card.id.clone())) {
                    return false;
                }
                let api = self.api.clone();
                ctx.link().send_future(async move {
                    let result = api.remove_card(&card.id).await;
                    Msg::DeleteSettled {
                        card_id: card.id,
                        result,
                    }
                });
                true
            }
            Msg::DeleteSettled { card_id, result } => {
                if let Err(e) = self.state.finish_delete(&card_id, result) {
                    notify::report(&e);
                }
                true
            }
            Msg::EditProfileClick => {
                self.state.open_edit_profile();
                true
            }
            Msg::AddPlaceClick => {
                self.state.open_add_place();
                true
            }
            Msg::EditAvatarClick => {
                self.state.open_edit_avatar();
                true
            }
            Msg::CloseAllPopups => {
                self.state.close_all_popups();
                true
            }
            Msg::UpdateUser(profile) => {
                if !self.state.begin(Submission::UpdateProfile) {
                    return false;
                }
                let api = self.api.clone();
                ctx.link()
                    .send_future(async move { Msg::UserSettled(api.set_user_info(&profile).await) });
                true
            }
            Msg::UpdateAvatar(avatar) => {
                if !self.state.begin(Submission::UpdateAvatar) {
                    return false;
                }
                let api = self.api.clone();
                ctx.link()
                    .send_future(async move { Msg::UserSettled(api.update_avatar(&avatar).await) });
                true
            }
            Msg::UserSettled(result) => {
                if let Err(e) = self.state.finish_update_user(result) {
                    notify::report(&e);
                }
                true
            }
            Msg::AddPlaceSubmit(card) => {
                if !self.state.begin(Submission::AddPlace) {
                    return false;
                }
                let api = self.api.clone();
                ctx.link().send_future(async move {
                    Msg::AddPlaceSettled(api.create_new_card(&card).await)
                });
                true
            }
            Msg::AddPlaceSettled(result) => {
                if let Err(e) = self.state.finish_add_place(result) {
                    notify::report(&e);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current_user: CurrentUser = Rc::new(self.state.current_user.clone());
        let home = self.home(ctx);
        let auth = self.auth;

        html! {
            <BrowserRouter>
                <div class="page page__content">
                    <ContextProvider<CurrentUser> context={current_user}>
                        <Header/>
                        <Switch<Route> render={Switch::render(move |route: &Route| routes::switch(route, home.clone(), auth))}/>
                    </ContextProvider<CurrentUser>>
                </div>
            </BrowserRouter>
        }
    }
}

impl App {
    fn home(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let state = &self.state;
        let close = link.callback(|_: ()| Msg::CloseAllPopups);

        html! {
            <>
                <Places
                    cards={state.cards.clone()}
                    on_card_like={link.callback(Msg::CardLike)}
                    on_card_delete={link.callback(Msg::CardDelete)}
                    on_card_click={link.callback(Msg::CardClick)}
                    on_edit_avatar={link.callback(|_: ()| Msg::EditAvatarClick)}
                    on_edit_profile={link.callback(|_: ()| Msg::EditProfileClick)}
                    on_add_place={link.callback(|_: ()| Msg::AddPlaceClick)}
                />
                <Footer/>
                <EditProfilePopup
                    is_open={state.is_edit_profile_open()}
                    button_caption={state.captions.others}
                    on_close={close.clone()}
                    on_update_user={link.callback(Msg::UpdateUser)}
                />
                <AddPlacePopup
                    is_open={state.is_add_place_open()}
                    button_caption={state.captions.add}
                    on_close={close.clone()}
                    on_add_place={link.callback(Msg::AddPlaceSubmit)}
                />
                <EditAvatarPopup
                    is_open={state.is_edit_avatar_open()}
                    button_caption={state.captions.others}
                    on_close={close.clone()}
                    on_update_avatar={link.callback(Msg::UpdateAvatar)}
                />
                <DeleteConfirmPopup
                    card={state.card_to_delete().cloned()}
                    button_caption={state.captions.delete}
                    on_close={close.clone()}
                    on_delete={link.callback(Msg::Delete)}
                />
                <ImagePopup card={state.selected_card().cloned()} on_close={close}/>
                <Loader is_visible={state.loader_visible} image={LOADING_AVATAR}/>
            </>
        }
    }
}
