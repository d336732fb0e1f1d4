use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

pub const LOADING_NAME: &str = "Идёт загрузка...";
pub const LOADING_AVATAR: &str = "images/card-load.gif";

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Profile of the signed-in user, as returned by `/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub about: String,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

impl User {
    /// Placeholder shown until the first `/users/me` response arrives.
    pub fn loading() -> Self {
        Self {
            id: UserId::default(),
            name: LOADING_NAME.to_string(),
            about: String::new(),
            avatar_url: LOADING_AVATAR.to_string(),
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::loading()
    }
}

/// Current user handed down through a `ContextProvider`.
pub type CurrentUser = Rc<User>;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub about: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AvatarUpdate {
    pub avatar: String,
}

/// Email and password typed into the sign-in or sign-up form.
#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
