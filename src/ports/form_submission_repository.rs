//! Form Submission Repository Port - storage for intake forms.

use async_trait::async_trait;

use crate::domain::intake::{FormSubmission, IntakeError};

/// Append-only store of intake form submissions.
#[async_trait]
pub trait FormSubmissionRepository: Send + Sync {
    /// Stores a submission and returns the total number stored.
    async fn append(&self, submission: FormSubmission) -> Result<usize, IntakeError>;
}
