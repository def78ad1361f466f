//! Environment configuration.
//!
//! Read once at startup. Only the document-task path needs any of this; the
//! arcade runs without an API key.

use thiserror::Error;

/// Model used when `DESKPLAY_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-002";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
}

/// Application settings.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Gemini API key (`GEMINI_API_KEY`).
    pub api_key: String,
    /// Model name (`DESKPLAY_MODEL`).
    pub model: String,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("GEMINI_API_KEY").ok(),
            std::env::var("DESKPLAY_MODEL").ok(),
        )
    }

    fn from_vars(api_key: Option<String>, model: Option<String>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let model = model
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        Ok(Self { api_key, model })
    }
}
