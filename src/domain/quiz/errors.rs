//! Quiz-specific error types.

use thiserror::Error;

use crate::ports::AIError;

/// Errors raised by quiz operations invoked by a client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The caller sent a value outside the accepted domain.
    #[error("invalid {field}: {message}")]
    InvalidInput { field: String, message: String },
}

impl QuizError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        QuizError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Reasons a question set could not be generated.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The text-generation provider could not be reached or refused the call.
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(#[from] AIError),

    /// The provider answered with something that is not valid JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The payload decoded but does not have the expected shape.
    #[error("schema violation: {0}")]
    SchemaViolation(String),
}

impl GenerationError {
    pub fn malformed(message: impl Into<String>) -> Self {
        GenerationError::MalformedResponse(message.into())
    }

    pub fn schema(message: impl Into<String>) -> Self {
        GenerationError::SchemaViolation(message.into())
    }

    /// Short machine-readable label, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::ProviderUnavailable(_) => "provider_unavailable",
            GenerationError::MalformedResponse(_) => "malformed_response",
            GenerationError::SchemaViolation(_) => "schema_violation",
        }
    }
}
