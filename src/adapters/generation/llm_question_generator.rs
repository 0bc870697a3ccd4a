//! LLM-backed QuestionGenerator implementation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{GenerationError, QuestionSet, SCHEDULE};
use crate::ports::{AIProvider, CompletionRequest, MessageRole, QuestionGenerator, RequestMetadata};

use super::prompt::build_generation_prompt;
use super::response_parser::parse_questions;

/// Generates a question set with one completion call.
///
/// Categories are never read from the completion: each parsed question is
/// bound to the category scheduled for its position.
pub struct LlmQuestionGenerator {
    ai_provider: Arc<dyn AIProvider>,
    temperature: Option<f32>,
}

impl LlmQuestionGenerator {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            ai_provider,
            temperature: None,
        }
    }

    /// Sets the sampling temperature sent with the request.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    fn build_request(&self, session_id: QuizSessionId) -> CompletionRequest {
        let metadata = RequestMetadata::new(
            session_id,
            format!("question-generation-{}", uuid::Uuid::new_v4()),
        );

        let request = CompletionRequest::new(metadata)
            .with_message(MessageRole::User, build_generation_prompt(&SCHEDULE));

        match self.temperature {
            Some(temperature) => request.with_temperature(temperature),
            None => request,
        }
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(&self, session_id: QuizSessionId) -> Result<QuestionSet, GenerationError> {
        let request = self.build_request(session_id);
        let trace_id = request.metadata.trace_id.clone();

        tracing::debug!(%session_id, %trace_id, "requesting question set");

        let response = self.ai_provider.complete(request).await?;

        tracing::debug!(
            %session_id,
            %trace_id,
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "question set received"
        );

        let drafts = parse_questions(&response.content)?;
        QuestionSet::bind(drafts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::generation::response_parser::fixtures::payload;
    use serde_json::Value;

    fn generator(provider: &MockAIProvider) -> LlmQuestionGenerator {
        LlmQuestionGenerator::new(Arc::new(provider.clone()))
    }

    #[tokio::test]
    async fn generates_schedule_aligned_questions() {
        let provider = MockAIProvider::new().with_response(payload(12));

        let set = generator(&provider)
            .generate(QuizSessionId::new())
            .await
            .unwrap();

        assert_eq!(set.len(), 12);
        for (i, question) in set.iter().enumerate() {
            assert_eq!(Some(question.category()), SCHEDULE.at(i));
        }
    }

    #[tokio::test]
    async fn provider_category_claims_are_overridden() {
        let mut items: Vec<Value> = serde_json::from_str(&payload(12)).unwrap();
        for item in &mut items {
            item["riasec"] = Value::from("C");
        }
        let provider = MockAIProvider::new().with_response(Value::Array(items).to_string());

        let set = generator(&provider)
            .generate(QuizSessionId::new())
            .await
            .unwrap();

        let letters: String = set.iter().map(|q| q.category().letter()).collect();
        assert_eq!(letters, "RIASECRIASEC");
    }

    #[tokio::test]
    async fn issues_exactly_one_call_with_the_prompt() {
        let provider = MockAIProvider::new().with_response(payload(12));
        let session_id = QuizSessionId::new();

        generator(&provider).generate(session_id).await.unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].metadata.session_id, session_id);
        assert!(calls[0].metadata.trace_id.starts_with("question-generation-"));
        assert!(calls[0].messages[0].content.contains("12. C:"));
        assert_eq!(calls[0].temperature, None);
    }

    #[tokio::test]
    async fn forwards_configured_temperature() {
        let provider = MockAIProvider::new().with_response(payload(12));

        generator(&provider)
            .with_temperature(Some(0.8))
            .generate(QuizSessionId::new())
            .await
            .unwrap();

        assert_eq!(provider.get_calls()[0].temperature, Some(0.8));
    }

    #[tokio::test]
    async fn provider_failure_is_provider_unavailable_without_retry() {
        let provider = MockAIProvider::new()
            .with_error(MockError::Unavailable {
                message: "overloaded".into(),
            })
            .with_response(payload(12));

        let err = generator(&provider)
            .generate(QuizSessionId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::ProviderUnavailable(_)));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn fenced_response_is_accepted() {
        let provider =
            MockAIProvider::new().with_response(format!("```json\n{}\n```", payload(12)));

        assert!(generator(&provider)
            .generate(QuizSessionId::new())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn eleven_items_fail_with_schema_violation() {
        let provider = MockAIProvider::new().with_response(payload(11));

        let err = generator(&provider)
            .generate(QuizSessionId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::SchemaViolation(_)));
    }

    #[tokio::test]
    async fn three_options_fail_with_schema_violation() {
        let mut items: Vec<Value> = serde_json::from_str(&payload(12)).unwrap();
        items[7]["options"].as_array_mut().unwrap().pop();
        let provider = MockAIProvider::new().with_response(Value::Array(items).to_string());

        let err = generator(&provider)
            .generate(QuizSessionId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::SchemaViolation(_)));
    }

    #[tokio::test]
    async fn prose_fails_with_malformed_response() {
        let provider = MockAIProvider::new().with_response("I can't help with that.");

        let err = generator(&provider)
            .generate(QuizSessionId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }
}
