pub mod api;
pub mod notify;

pub use api::{Api, ApiError, ApiResult};
