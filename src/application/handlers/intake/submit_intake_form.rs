//! SubmitIntakeFormHandler - Command handler for storing intake forms.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::foundation::SubmissionId;
use crate::domain::intake::{FormSubmission, IntakeError};
use crate::ports::FormSubmissionRepository;

/// Result of a stored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitIntakeFormResult {
    pub submission_id: SubmissionId,
    pub total_submissions: usize,
}

/// Handler for intake form submissions.
pub struct SubmitIntakeFormHandler {
    repository: Arc<dyn FormSubmissionRepository>,
}

impl SubmitIntakeFormHandler {
    pub fn new(repository: Arc<dyn FormSubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, payload: Value) -> Result<SubmitIntakeFormResult, IntakeError> {
        let submission = FormSubmission::from_json(payload)?;
        let submission_id = submission.id();
        let field_count = submission.fields().len();
        let fields = serde_json::to_string_pretty(submission.fields()).unwrap_or_default();

        let total_submissions = self.repository.append(submission).await?;

        tracing::info!(
            %submission_id,
            field_count,
            total_submissions,
            "intake form stored\n{}",
            fields
        );

        Ok(SubmitIntakeFormResult {
            submission_id,
            total_submissions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFormSubmissionStore;
    use async_trait::async_trait;
    use serde_json::json;

    struct FailingRepository;

    #[async_trait]
    impl FormSubmissionRepository for FailingRepository {
        async fn append(&self, _: FormSubmission) -> Result<usize, IntakeError> {
            Err(IntakeError::storage("disk full"))
        }
    }

    #[tokio::test]
    async fn stores_objects_and_counts_them() {
        let store = InMemoryFormSubmissionStore::new();
        let handler = SubmitIntakeFormHandler::new(Arc::new(store.clone()));

        handler.handle(json!({"name": "Asha"})).await.unwrap();
        let result = handler.handle(json!({"name": "Ravi", "grade": 10})).await.unwrap();

        assert_eq!(result.total_submissions, 2);
        assert_eq!(store.all().await[1].id(), result.submission_id);
    }

    #[tokio::test]
    async fn rejects_non_objects_without_storing() {
        let store = InMemoryFormSubmissionStore::new();
        let handler = SubmitIntakeFormHandler::new(Arc::new(store.clone()));

        let err = handler.handle(json!(["not", "an", "object"])).await.unwrap_err();

        assert!(matches!(err, IntakeError::InvalidPayload(_)));
        assert!(store.all().await.is_empty());
    }

    #[tokio::test]
    async fn propagates_storage_failures() {
        let handler = SubmitIntakeFormHandler::new(Arc::new(FailingRepository));

        let err = handler.handle(json!({})).await.unwrap_err();

        assert!(matches!(err, IntakeError::Storage(_)));
    }
}
