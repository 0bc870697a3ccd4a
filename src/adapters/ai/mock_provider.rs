//! Mock AI Provider for testing.
//!
//! Replays queued completions or errors in order and records every request,
//! so generation can be exercised without a real provider.
//!
//! ```ignore
//! let provider = MockAIProvider::new().with_response(questions_json);
//! let generator = LlmQuestionGenerator::new(Arc::new(provider.clone()));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

const MOCK_MODEL: &str = "mock-model-1";

/// Mock AI provider. Clones share the queue and the call history.
#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A queued mock outcome.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Completion text returned verbatim.
    Completion(String),
    Error(MockError),
}

/// Provider failures a test can inject.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    AuthenticationFailed,
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
        }
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a completion.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Completion(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: MockError) -> Self {
        self.push(MockResponse::Error(error));
        self
    }

    /// Queues an outcome on a shared provider (e.g. one already wired into a router).
    pub fn push(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// An empty queue answers with an empty JSON array.
    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Completion("[]".to_string()))
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.calls.lock().unwrap().push(request);

        match self.next_response() {
            MockResponse::Completion(content) => Ok(CompletionResponse {
                content,
                usage: TokenUsage::default(),
                model: MOCK_MODEL.to_string(),
                finish_reason: FinishReason::Stop,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", MOCK_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuizSessionId;
    use crate::ports::{MessageRole, RequestMetadata};

    fn test_request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(QuizSessionId::new(), "trace-123"))
            .with_message(MessageRole::User, "Generate")
    }

    #[tokio::test]
    async fn replays_queue_in_order_then_empty_array() {
        let provider = MockAIProvider::new()
            .with_response("First")
            .with_error(MockError::Unavailable {
                message: "down".into(),
            });

        let first = provider.complete(test_request()).await.unwrap();
        let second = provider.complete(test_request()).await.unwrap_err();
        let third = provider.complete(test_request()).await.unwrap();

        assert_eq!(first.content, "First");
        assert_eq!(first.model, "mock-model-1");
        assert!(matches!(second, AIError::Unavailable { .. }));
        assert_eq!(third.content, "[]");
    }

    #[tokio::test]
    async fn rate_limit_keeps_retry_hint() {
        let provider =
            MockAIProvider::new().with_error(MockError::RateLimited { retry_after_secs: 30 });

        let err = provider.complete(test_request()).await.unwrap_err();

        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn clones_share_queue_and_call_history() {
        let provider = MockAIProvider::new();
        let handle = provider.clone();

        handle.push(MockResponse::Error(MockError::AuthenticationFailed));

        let err = provider.complete(test_request()).await.unwrap_err();
        assert!(matches!(err, AIError::AuthenticationFailed));
        assert_eq!(handle.call_count(), 1);
        assert_eq!(handle.get_calls()[0].messages[0].content, "Generate");
    }

    #[test]
    fn reports_mock_provider_info() {
        let info = MockAIProvider::new().provider_info();
        assert_eq!(info.name, "mock");
        assert_eq!(info.model, "mock-model-1");
    }
}
