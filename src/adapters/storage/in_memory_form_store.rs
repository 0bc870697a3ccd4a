//! In-Memory Form Submission Store
//!
//! Keeps intake submissions for the lifetime of the process.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::intake::{FormSubmission, IntakeError};
use crate::ports::FormSubmissionRepository;

/// Append-only in-memory store for intake submissions
#[derive(Debug, Clone)]
pub struct InMemoryFormSubmissionStore {
    submissions: Arc<RwLock<Vec<FormSubmission>>>,
}

impl InMemoryFormSubmissionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Snapshot of every stored submission, oldest first
    #[cfg(test)]
    pub(crate) async fn all(&self) -> Vec<FormSubmission> {
        self.submissions.read().await.clone()
    }
}

impl Default for InMemoryFormSubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FormSubmissionRepository for InMemoryFormSubmissionStore {
    async fn append(&self, submission: FormSubmission) -> Result<usize, IntakeError> {
        let mut submissions = self.submissions.write().await;
        submissions.push(submission);
        Ok(submissions.len())
    }
}
