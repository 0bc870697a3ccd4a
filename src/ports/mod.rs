//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text-generation provider (Gemini)
//! - `QuestionGenerator` - Produces a schedule-bound question set
//! - `FormSubmissionRepository` - Stores intake form submissions

mod ai_provider;
mod form_submission_repository;
mod question_generator;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use form_submission_repository::FormSubmissionRepository;
pub use question_generator::QuestionGenerator;
