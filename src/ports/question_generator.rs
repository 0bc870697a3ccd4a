//! Question Generator Port - produces the question set for a quiz run.

use async_trait::async_trait;

use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{GenerationError, QuestionSet};

/// Port for producing a full, schedule-bound question set.
///
/// Implementations make at most one provider call per invocation and never
/// retry; a failure is returned to the caller as-is.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Generates twelve questions aligned with the category schedule.
    async fn generate(&self, session_id: QuizSessionId) -> Result<QuestionSet, GenerationError>;
}
