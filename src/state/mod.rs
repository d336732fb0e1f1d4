//! View state of the application shell.
//!
//! [`AppState`] holds everything the page renders from: the signed-in user,
//! the card feed, which popup is open and the submit button captions. Every
//! change goes through a method here; the `App` component only performs the
//! requests and feeds their results back in.

pub mod captions;

pub use captions::{ButtonCaptions, Caption, CaptionSlot};

pub use crate::models::LikeRequest;

use crate::models::{Card, CardId, User};
use crate::services::{ApiError, ApiResult};

/// The modal currently on screen. Only one can be open at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum Popup {
    EditProfile,
    AddPlace,
    EditAvatar,
    ConfirmDelete(Card),
    ImagePreview(Card),
}

/// A captioned request that is waiting for the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    UpdateProfile,
    UpdateAvatar,
    AddPlace,
    DeleteCard(CardId),
}

impl Submission {
    pub fn caption_slot(&self) -> CaptionSlot {
        match self {
            Submission::UpdateProfile | Submission::UpdateAvatar => CaptionSlot::Others,
            Submission::AddPlace => CaptionSlot::Add,
            Submission::DeleteCard(_) => CaptionSlot::Delete,
        }
    }

    /// Whether `popup` is the form this submission was sent from.
    pub fn owns(&self, popup: &Popup) -> bool {
        match (self, popup) {
            (Submission::UpdateProfile, Popup::EditProfile)
            | (Submission::UpdateAvatar, Popup::EditAvatar)
            | (Submission::AddPlace, Popup::AddPlace) => true,
            (Submission::DeleteCard(id), Popup::ConfirmDelete(card)) => &card.id == id,
            _ => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub current_user: User,
    pub cards: Vec<Card>,
    pub popup: Option<Popup>,
    pub loader_visible: bool,
    pub captions: ButtonCaptions,
    in_flight: Option<Submission>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_user: User::loading(),
            cards: Vec::new(),
            popup: None,
            loader_visible: true,
            captions: ButtonCaptions::default(),
            in_flight: None,
        }
    }

    /// Stores whichever half of the first load succeeded and hides the
    /// loader. Returns the failures so each can be reported.
    pub fn finish_initial_load(
        &mut self,
        user: ApiResult<User>,
        cards: ApiResult<Vec<Card>>,
    ) -> Vec<ApiError> {
        let mut errors = Vec::new();
        match user {
            Ok(user) => self.current_user = user,
            Err(e) => errors.push(e),
        }
        match cards {
            Ok(cards) => self.cards = cards,
            Err(e) => errors.push(e),
        }
        self.loader_visible = false;
        errors
    }

    pub fn like_request(&self, card: &Card) -> LikeRequest {
        if card.is_liked_by(&self.current_user.id) {
            LikeRequest::Dislike
        } else {
            LikeRequest::Like
        }
    }

    /// The server's copy of the card wins; nothing is toggled locally.
    pub fn finish_card_like(&mut self, card_id: &CardId, result: ApiResult<Card>) -> ApiResult<()> {
        let card = result?;
        self.replace_card(card_id, card);
        Ok(())
    }

    fn replace_card(&mut self, card_id: &CardId, card: Card) {
        if let Some(slot) = self.cards.iter_mut().find(|c| &c.id == card_id) {
            *slot = card;
        }
    }

    pub fn open_edit_profile(&mut self) {
        self.popup = Some(Popup::EditProfile);
    }

    pub fn open_add_place(&mut self) {
        self.popup = Some(Popup::AddPlace);
    }

    pub fn open_edit_avatar(&mut self) {
        self.popup = Some(Popup::EditAvatar);
    }

    pub fn select_card(&mut self, card: Card) {
        self.popup = Some(Popup::ImagePreview(card));
    }

    /// Deleting is two-step: this only asks for confirmation.
    pub fn request_delete(&mut self, card: Card) {
        self.popup = Some(Popup::ConfirmDelete(card));
    }

    pub fn close_all_popups(&mut self) {
        self.popup = None;
    }

    pub fn is_edit_profile_open(&self) -> bool {
        matches!(self.popup, Some(Popup::EditProfile))
    }

    pub fn is_add_place_open(&self) -> bool {
        matches!(self.popup, Some(Popup::AddPlace))
    }

    pub fn is_edit_avatar_open(&self) -> bool {
        matches!(self.popup, Some(Popup::EditAvatar))
    }

    pub fn selected_card(&self) -> Option<&Card> {
        match &self.popup {
            Some(Popup::ImagePreview(card)) => Some(card),
            _ => None,
        }
    }

    pub fn card_to_delete(&self) -> Option<&Card> {
        match &self.popup {
            Some(Popup::ConfirmDelete(card)) => Some(card),
            _ => None,
        }
    }

    pub fn in_flight(&self) -> Option<&Submission> {
        self.in_flight.as_ref()
    }

    /// Marks `submission` as pending and switches its button to the
    /// in-progress caption. Returns false, changing nothing, while another
    /// submission is still pending.
    pub fn begin(&mut self, submission: Submission) -> bool {
        if let Some(pending) = &self.in_flight {
            log::debug!("{:?} ignored, {:?} still pending", submission, pending);
            return false;
        }
        self.captions = ButtonCaptions::in_progress(submission.caption_slot());
        self.in_flight = Some(submission);
        true
    }

    fn settle(&mut self) -> Option<Submission> {
        self.captions = ButtonCaptions::default();
        self.in_flight.take()
    }

    /// Closes the form `submission` came from. A popup opened while the
    /// request was pending stays open.
    fn close_popup_of(&mut self, submission: Option<Submission>) {
        let owned = match (&submission, &self.popup) {
            (Some(submission), Some(popup)) => submission.owns(popup),
            _ => false,
        };
        if owned {
            self.close_all_popups();
        }
    }

    /// Settles a profile or avatar update.
    pub fn finish_update_user(&mut self, result: ApiResult<User>) -> ApiResult<()> {
        let submission = self.settle();
        self.current_user = result?;
        self.close_popup_of(submission);
        Ok(())
    }

    pub fn finish_add_place(&mut self, result: ApiResult<Card>) -> ApiResult<()> {
        let submission = self.settle();
        let card = result?;
        self.cards.retain(|c| c.id != card.id);
        self.cards.insert(0, card);
        self.close_popup_of(submission);
        Ok(())
    }

    pub fn finish_delete(&mut self, card_id: &CardId, result: ApiResult<()>) -> ApiResult<()> {
        let submission = self.settle();
        result?;
        self.cards.retain(|c| &c.id != card_id);
        self.close_popup_of(submission);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::models::UserId;

    fn user(id: &str, name: &str) -> User {
        User {
            id: UserId::from(id),
            name: name.to_string(),
            about: "x".to_string(),
            avatar_url: "u".to_string(),
        }
    }

    fn card(id: &str, likers: &[&str]) -> Card {
        Card {
            id: CardId::from(id),
            title: format!("card {}", id),
            image_url: format!("https://example.com/{}.jpg", id),
            owner_id: UserId::from("1"),
            liked_by: likers.iter().map(|&l| UserId::from(l)).collect::<BTreeSet<_>>(),
        }
    }

    fn loaded(cards: Vec<Card>) -> AppState {
        let mut state = AppState::new();
        let errors = state.finish_initial_load(Ok(user("1", "A")), Ok(cards));
        assert!(errors.is_empty());
        state
    }

    fn ids(state: &AppState) -> Vec<&str> {
        state.cards.iter().map(|c| c.id.0.as_str()).collect()
    }

    #[test]
    fn starts_loading_with_placeholder_user() {
        let state = AppState::new();
        assert!(state.loader_visible);
        assert_eq!(state.current_user, User::loading());
        assert!(state.cards.is_empty());
        assert_eq!(state.popup, None);
        assert_eq!(state.captions, ButtonCaptions::default());
    }

    #[test]
    fn initial_load_stores_user_and_cards() {
        let state = loaded(vec![card("5", &[])]);

        assert_eq!(state.current_user, user("1", "A"));
        assert_eq!(ids(&state), vec!["5"]);
        assert!(!state.loader_visible);
    }

    #[test]
    fn initial_load_keeps_the_half_that_succeeded() {
        let mut state = AppState::new();
        let errors =
            state.finish_initial_load(Ok(user("1", "A")), Err(ApiError::Status(500)));

        assert_eq!(errors, vec![ApiError::Status(500)]);
        assert_eq!(state.current_user, user("1", "A"));
        assert!(state.cards.is_empty());
        assert!(!state.loader_visible);
    }

    #[test]
    fn initial_load_reports_both_failures() {
        let mut state = AppState::new();
        let errors = state.finish_initial_load(
            Err(ApiError::Status(401)),
            Err(ApiError::Network("offline".into())),
        );

        assert_eq!(
            errors,
            vec![ApiError::Status(401), ApiError::Network("offline".into())]
        );
        assert_eq!(state.current_user, User::loading());
        assert!(!state.loader_visible);
    }

    #[test]
    fn liked_card_asks_for_dislike() {
        let state = loaded(vec![]);
        assert_eq!(state.like_request(&card("5", &["1", "2"])), LikeRequest::Dislike);
        assert_eq!(state.like_request(&card("5", &["2"])), LikeRequest::Like);
        assert_eq!(state.like_request(&card("5", &[])), LikeRequest::Like);
    }

    #[test]
    fn like_result_replaces_card_by_id() {
        let mut state = loaded(vec![card("4", &[]), card("5", &[]), card("6", &[])]);

        state
            .finish_card_like(&CardId::from("5"), Ok(card("5", &["1"])))
            .unwrap();

        assert_eq!(ids(&state), vec!["4", "5", "6"]);
        assert!(state.cards[1].is_liked_by(&UserId::from("1")));
        assert_eq!(state.cards[0], card("4", &[]));
    }

    #[test]
    fn last_successful_like_response_wins() {
        let mut state = loaded(vec![card("5", &[])]);
        let id = CardId::from("5");

        state.finish_card_like(&id, Ok(card("5", &["1"]))).unwrap();
        state.finish_card_like(&id, Ok(card("5", &["1", "3"]))).unwrap();
        let err = state
            .finish_card_like(&id, Err(ApiError::Status(500)))
            .unwrap_err();

        assert_eq!(err, ApiError::Status(500));
        assert_eq!(state.cards, vec![card("5", &["1", "3"])]);
    }

    #[test]
    fn failed_like_leaves_cards_untouched() {
        let mut state = loaded(vec![card("5", &["2"])]);
        let before = state.clone();

        assert!(state
            .finish_card_like(&CardId::from("5"), Err(ApiError::Status(403)))
            .is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn popups_are_exclusive() {
        let mut state = loaded(vec![card("5", &[])]);

        state.open_edit_profile();
        assert!(state.is_edit_profile_open());

        state.open_add_place();
        assert!(state.is_add_place_open());
        assert!(!state.is_edit_profile_open());

        state.select_card(card("5", &[]));
        assert_eq!(state.selected_card(), Some(&card("5", &[])));
        assert!(!state.is_add_place_open());
        assert_eq!(state.card_to_delete(), None);
    }

    #[test]
    fn close_all_popups_is_idempotent() {
        let mut state = loaded(vec![card("5", &[])]);
        let openers: Vec<fn(&mut AppState)> = vec![
            |s: &mut AppState| s.open_edit_profile(),
            |s: &mut AppState| s.open_add_place(),
            |s: &mut AppState| s.open_edit_avatar(),
            |s: &mut AppState| s.request_delete(card("5", &[])),
            |s: &mut AppState| s.select_card(card("5", &[])),
            |_: &mut AppState| {},
        ];

        for open in openers {
            open(&mut state);
            state.close_all_popups();
            let once = state.clone();
            state.close_all_popups();

            assert_eq!(state, once);
            assert_eq!(state.popup, None);
            assert!(!state.is_edit_profile_open());
            assert!(!state.is_add_place_open());
            assert!(!state.is_edit_avatar_open());
            assert_eq!(state.selected_card(), None);
            assert_eq!(state.card_to_delete(), None);
        }
    }

    #[test]
    fn confirmed_delete_removes_card_and_closes_popups() {
        let card5 = card("5", &[]);
        let mut state = loaded(vec![card("4", &[]), card5.clone(), card("6", &[])]);

        state.request_delete(card5.clone());
        assert_eq!(state.card_to_delete(), Some(&card5));
        assert_eq!(ids(&state), vec!["4", "5", "6"]);

        assert!(state.begin(Submission::DeleteCard(card5.id.clone())));
        assert_eq!(state.captions.delete, "Удаление...");

        state.finish_delete(&card5.id, Ok(())).unwrap();

        assert_eq!(ids(&state), vec!["4", "6"]);
        assert_eq!(state.popup, None);
        assert_eq!(state.captions, ButtonCaptions::default());
        assert_eq!(state.in_flight(), None);
    }

    #[test]
    fn failed_delete_keeps_card_and_resets_caption() {
        let card5 = card("5", &[]);
        let mut state = loaded(vec![card5.clone()]);
        state.request_delete(card5.clone());
        state.begin(Submission::DeleteCard(card5.id.clone()));

        let err = state
            .finish_delete(&card5.id, Err(ApiError::Status(403)))
            .unwrap_err();

        assert_eq!(err, ApiError::Status(403));
        assert_eq!(ids(&state), vec!["5"]);
        assert_eq!(state.card_to_delete(), Some(&card5));
        assert_eq!(state.captions, ButtonCaptions::default());
    }

    #[test]
    fn added_card_goes_first() {
        let mut state = loaded(vec![card("4", &[]), card("5", &[])]);
        state.open_add_place();

        assert!(state.begin(Submission::AddPlace));
        assert_eq!(state.captions.add, "Сохранение...");
        assert_eq!(state.captions.others, "Сохранить");

        state.finish_add_place(Ok(card("9", &[]))).unwrap();

        assert_eq!(ids(&state), vec!["9", "4", "5"]);
        assert_eq!(state.popup, None);
        assert_eq!(state.captions, ButtonCaptions::default());
    }

    #[test]
    fn popup_opened_while_adding_survives_success() {
        let mut state = loaded(vec![card("4", &[])]);
        state.open_add_place();
        assert!(state.begin(Submission::AddPlace));

        state.close_all_popups();
        state.select_card(card("4", &[]));

        state.finish_add_place(Ok(card("9", &[]))).unwrap();

        assert_eq!(ids(&state), vec!["9", "4"]);
        assert_eq!(state.selected_card(), Some(&card("4", &[])));
        assert_eq!(state.captions, ButtonCaptions::default());
    }

    #[test]
    fn delete_success_keeps_confirmation_for_another_card() {
        let mut state = loaded(vec![card("4", &[]), card("5", &[])]);
        state.request_delete(card("5", &[]));
        assert!(state.begin(Submission::DeleteCard(CardId::from("5"))));

        state.request_delete(card("4", &[]));
        state.finish_delete(&CardId::from("5"), Ok(())).unwrap();

        assert_eq!(ids(&state), vec!["4"]);
        assert_eq!(state.card_to_delete(), Some(&card("4", &[])));
    }

    #[test]
    fn profile_success_closes_only_its_own_form() {
        let mut state = loaded(vec![]);
        state.open_edit_profile();
        assert!(state.begin(Submission::UpdateProfile));
        state.open_edit_avatar();

        state.finish_update_user(Ok(user("1", "B"))).unwrap();

        assert_eq!(state.current_user.name, "B");
        assert!(state.is_edit_avatar_open());
    }

    #[test]
    fn failed_add_keeps_popup_open() {
        let mut state = loaded(vec![card("4", &[])]);
        state.open_add_place();
        state.begin(Submission::AddPlace);

        assert!(state.finish_add_place(Err(ApiError::Status(400))).is_err());

        assert_eq!(ids(&state), vec!["4"]);
        assert!(state.is_add_place_open());
        assert_eq!(state.captions, ButtonCaptions::default());
    }

    #[test]
    fn profile_update_replaces_user_wholesale() {
        let mut state = loaded(vec![]);
        state.open_edit_profile();

        assert!(state.begin(Submission::UpdateProfile));
        assert_eq!(state.captions.others, "Сохранение...");

        let updated = User {
            about: "новое".into(),
            ..user("1", "B")
        };
        state.finish_update_user(Ok(updated.clone())).unwrap();

        assert_eq!(state.current_user, updated);
        assert_eq!(state.popup, None);
        assert_eq!(state.captions, ButtonCaptions::default());
    }

    #[test]
    fn failed_avatar_update_keeps_user() {
        let mut state = loaded(vec![]);
        state.open_edit_avatar();
        state.begin(Submission::UpdateAvatar);

        assert!(state
            .finish_update_user(Err(ApiError::Network("offline".into())))
            .is_err());

        assert_eq!(state.current_user, user("1", "A"));
        assert!(state.is_edit_avatar_open());
        assert_eq!(state.captions, ButtonCaptions::default());
        assert_eq!(state.in_flight(), None);
    }

    #[test]
    fn second_submission_is_rejected_while_pending() {
        let mut state = loaded(vec![card("5", &[])]);

        assert!(state.begin(Submission::UpdateProfile));
        let captions = state.captions;

        assert!(!state.begin(Submission::AddPlace));
        assert!(!state.begin(Submission::DeleteCard(CardId::from("5"))));
        assert_eq!(state.captions, captions);
        assert_eq!(state.in_flight(), Some(&Submission::UpdateProfile));

        state.finish_update_user(Ok(user("1", "A"))).unwrap();
        assert!(state.begin(Submission::AddPlace));
    }
}
