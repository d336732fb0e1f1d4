//! Build-time settings.
//!
//! The API endpoint and token are baked in at compile time, so a deploy can
//! point the client elsewhere with `MESTO_API_URL=... MESTO_API_TOKEN=... trunk build`.

const DEFAULT_API_URL: &str = "https://mesto.nomoreparties.co/v1/cohort-26";
const DEFAULT_API_TOKEN: &str = "";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            option_env!("MESTO_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("MESTO_API_TOKEN").unwrap_or(DEFAULT_API_TOKEN),
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Sign-in gate for the home route. There is no session handling yet, so
/// the client always behaves as signed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthConfig {
    pub logged_in: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { logged_in: true }
    }
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ApiConfig::new("https://api.example.com/v1/", "t");
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.token, "t");
    }

    #[test]
    fn home_is_open_by_default() {
        assert!(AuthConfig::default().logged_in);
    }
}
