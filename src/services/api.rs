use std::rc::Rc;

use reqwasm::http::{Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::{AvatarUpdate, Card, CardId, LikeRequest, NewCard, ProfileUpdate, User};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Ошибка: {0}")]
    Status(u16),

    #[error("Ошибка сети: {0}")]
    Network(String),

    #[error("Ошибка разбора ответа: {0}")]
    Decode(String),
}

impl From<reqwasm::Error> for ApiError {
    fn from(err: reqwasm::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<Verb> for Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
        }
    }
}

/// Client for the Mesto REST API.
///
/// Each call is a single request: no retries, no caching. Non-2xx responses
/// come back as [`ApiError::Status`].
#[derive(Clone, Debug, PartialEq)]
pub struct Api {
    config: Rc<ApiConfig>,
}

impl Api {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    pub async fn get_user_info(&self) -> ApiResult<User> {
        self.call(Verb::Get, "/users/me", None::<&()>).await
    }

    pub async fn get_initial_cards(&self) -> ApiResult<Vec<Card>> {
        self.call(Verb::Get, "/cards", None::<&()>).await
    }

    /// Likes or unlikes the card and returns the server's copy of it.
    pub async fn set_like(&self, request: LikeRequest, id: &CardId) -> ApiResult<Card> {
        let (verb, path) = like_endpoint(request, id);
        self.call(verb, &path, None::<&()>).await
    }

    pub async fn like_card(&self, id: &CardId) -> ApiResult<Card> {
        self.set_like(LikeRequest::Like, id).await
    }

    pub async fn dislike_card(&self, id: &CardId) -> ApiResult<Card> {
        self.set_like(LikeRequest::Dislike, id).await
    }

    pub async fn remove_card(&self, id: &CardId) -> ApiResult<()> {
        // The body is a bare acknowledgement, nothing to parse.
        self.send(Verb::Delete, &card_path(id), None::<&()>)
            .await
            .map(|_| ())
    }

    pub async fn create_new_card(&self, card: &NewCard) -> ApiResult<Card> {
        self.call(Verb::Post, "/cards", Some(card)).await
    }

    pub async fn set_user_info(&self, profile: &ProfileUpdate) -> ApiResult<User> {
        self.call(Verb::Patch, "/users/me", Some(profile)).await
    }

    pub async fn update_avatar(&self, avatar: &AvatarUpdate) -> ApiResult<User> {
        self.call(Verb::Patch, "/users/me/avatar", Some(avatar)).await
    }

    async fn call<T, B>(&self, verb: Verb, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let text = self.send(verb, path, body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn send<B: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<String> {
        let url = self.url(path);
        log::debug!("{:?} {}", verb, url);

        let mut request = Request::new(&url)
            .method(verb.into())
            .header("authorization", &self.config.token);
        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(serde_json::to_string(body)?);
        }

        let response = request.send().await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.text().await?)
    }
}

fn card_path(id: &CardId) -> String {
    format!("/cards/{}", id)
}

fn likes_path(id: &CardId) -> String {
    format!("/cards/{}/likes", id)
}

fn like_endpoint(request: LikeRequest, id: &CardId) -> (Verb, String) {
    let verb = match request {
        LikeRequest::Like => Verb::Put,
        LikeRequest::Dislike => Verb::Delete,
    };
    (verb, likes_path(id))
}
