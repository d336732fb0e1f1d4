pub mod card;
pub mod user;

pub use card::{Card, CardId, LikeRequest, NewCard};
pub use user::{AvatarUpdate, Credentials, CurrentUser, ProfileUpdate, User, UserId};
