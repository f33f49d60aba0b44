//! Error types for session lookup.

use thiserror::Error;

/// Errors raised while talking to the auth endpoints or reading settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// Request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Response body was not the expected JSON envelope.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Settings file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SessionError {
    /// Returns a user-friendly error message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the server. Please check your connection.",
            Self::Status(401 | 403) => "You are not signed in.",
            Self::Status(_) => "The server could not complete the request.",
            Self::JsonParse(_) => "The server sent an unexpected response.",
            Self::Config(_) => "Could not load session settings.",
        }
    }
}

impl From<reqwest::Error> for SessionError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

impl From<toml::de::Error> for SessionError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
