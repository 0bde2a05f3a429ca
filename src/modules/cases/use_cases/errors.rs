use crate::modules::cases::core::state::TransitionRejected;
use crate::shared::infrastructure::store::StoreError;
use thiserror::Error;

/// Input rejected before anything was written.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{0}` is required")]
    MissingField(&'static str),

    #[error("unknown area `{0}`")]
    UnknownArea(String),

    #[error("unknown process template `{0}`")]
    UnknownProcessTemplate(String),

    #[error(transparent)]
    InvalidTransition(#[from] TransitionRejected),
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("case `{0}` not found")]
    NotFound(String),

    #[error("concurrent update on case `{code}`: expected version {expected}, found {actual}")]
    ConcurrencyAnomaly {
        code: String,
        expected: i64,
        actual: i64,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}
