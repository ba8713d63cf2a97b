use crate::error::ExportError;
use std::env;

pub const TOKEN_VAR: &str = "SLACK_TOKEN";
pub const CHANNEL_VAR: &str = "CHANNEL_ID";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub channel_id: String,
}

impl Config {
    /// Validates the two required values without touching the environment
    /// or the network, so the entry layer can reject bad input up front.
    pub fn new(
        token: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Result<Self, ExportError> {
        let token = token.into();
        let channel_id = channel_id.into();

        if token.trim().is_empty() {
            return Err(ExportError::Config(TOKEN_VAR));
        }
        if channel_id.trim().is_empty() {
            return Err(ExportError::Config(CHANNEL_VAR));
        }

        Ok(Self { token, channel_id })
    }

    pub fn from_env() -> Result<Self, ExportError> {
        let token = env::var(TOKEN_VAR).unwrap_or_default();
        let channel_id = env::var(CHANNEL_VAR).unwrap_or_default();
        Self::new(token, channel_id)
    }
}
