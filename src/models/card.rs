use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::UserId;

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A place card in the feed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "CardRecord")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub image_url: String,
    pub owner_id: UserId,
    pub liked_by: BTreeSet<UserId>,
}

impl Card {
    pub fn is_liked_by(&self, user: &UserId) -> bool {
        self.liked_by.contains(user)
    }

    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner_id == user
    }

    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }
}

// The API embeds full user objects for the owner and for every like; only
// their ids matter here.
#[derive(Deserialize)]
struct UserRef {
    #[serde(rename = "_id")]
    id: UserId,
}

#[derive(Deserialize)]
struct CardRecord {
    #[serde(rename = "_id")]
    id: CardId,
    name: String,
    link: String,
    owner: UserRef,
    #[serde(default)]
    likes: Vec<UserRef>,
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        Self {
            id: record.id,
            title: record.name,
            image_url: record.link,
            owner_id: record.owner.id,
            liked_by: record.likes.into_iter().map(|like| like.id).collect(),
        }
    }
}

/// Which way a click on the like button goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeRequest {
    Like,
    Dislike,
}

/// Body of `POST /cards`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCard {
    #[serde(rename = "name")]
    pub title: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_JSON: &str = r#"{
        "likes": [
            {"name": "A", "about": "x", "avatar": "u", "_id": "1", "cohort": "c"},
            {"name": "B", "about": "y", "avatar": "v", "_id": "2", "cohort": "c"}
        ],
        "_id": "5",
        "name": "Архыз",
        "link": "https://example.com/arkhyz.jpg",
        "owner": {"name": "B", "about": "y", "avatar": "v", "_id": "2", "cohort": "c"},
        "createdAt": "2021-03-01T10:00:00.000Z"
    }"#;

    #[test]
    fn parses_card_with_embedded_users() {
        let card: Card = serde_json::from_str(CARD_JSON).unwrap();

        assert_eq!(card.id, CardId::from("5"));
        assert_eq!(card.title, "Архыз");
        assert_eq!(card.image_url, "https://example.com/arkhyz.jpg");
        assert_eq!(card.owner_id, UserId::from("2"));
        assert_eq!(card.like_count(), 2);
        assert!(card.is_liked_by(&UserId::from("1")));
        assert!(!card.is_liked_by(&UserId::from("3")));
        assert!(card.is_owned_by(&UserId::from("2")));
    }

    #[test]
    fn missing_likes_means_nobody_liked() {
        let json = r#"{"_id": "7", "name": "t", "link": "l", "owner": {"_id": "1"}}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.like_count(), 0);
    }

    #[test]
    fn new_card_uses_api_field_names() {
        let body = NewCard {
            title: "Байкал".into(),
            link: "https://example.com/baikal.jpg".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "name": "Байкал", "link": "https://example.com/baikal.jpg" })
        );
    }
}
