pub mod app;
pub mod auth;
pub mod card;
pub mod footer;
pub mod header;
pub mod loader;
pub mod places;
pub mod popups;
