//! Error types for the list controllers.

use stockroom_model::CategoryId;
use thiserror::Error;

/// Errors raised while loading data into a workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid fixture: {0}")]
    Fixture(#[from] serde_json::Error),
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}

pub type Result<T> = std::result::Result<T, CoreError>;

/// Form input rejected before any mutation happens.
///
/// These are recoverable: the form stays open and nothing is notified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("category is required")]
    MissingCategory,
    #[error("category {0} does not exist")]
    UnknownCategory(CategoryId),
    #[error("price cannot be negative")]
    NegativePrice,
    #[error("no identifiers left to assign")]
    IdsExhausted,
}

impl ValidationError {
    /// Short hint for the field that needs attention.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingName => "Enter a name.",
            Self::MissingCategory | Self::UnknownCategory(_) => "Choose a category.",
            Self::NegativePrice => "Enter a price of zero or more.",
            Self::IdsExhausted => "No more records can be added.",
        }
    }
}
