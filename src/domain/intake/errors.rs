//! Intake-specific error types.

use thiserror::Error;

/// Errors raised while accepting an intake form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// The submitted body is not a JSON object.
    #[error("invalid form payload: {0}")]
    InvalidPayload(String),

    /// The submission could not be stored.
    #[error("storage error: {0}")]
    Storage(String),
}

impl IntakeError {
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        IntakeError::InvalidPayload(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        IntakeError::Storage(message.into())
    }
}
