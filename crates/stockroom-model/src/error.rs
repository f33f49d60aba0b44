use thiserror::Error;

/// Errors raised while parsing model values from user input or fixtures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid identifier: {0} (identifiers are positive integers)")]
    InvalidId(String),
    #[error("unknown sort key: {0} (expected name, quantity or price)")]
    UnknownSortKey(String),
    #[error("unknown user role: {0}")]
    UnknownRole(String),
    #[error("unknown user status: {0}")]
    UnknownStatus(String),
    #[error("unknown alert status: {0}")]
    UnknownAlertStatus(String),
    #[error("unknown route: {0}")]
    UnknownRoute(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
