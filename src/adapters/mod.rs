//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text-generation providers (Gemini, mock)
//! - `generation` - Question generation on top of an AI provider
//! - `storage` - Intake form storage
//! - `http` - Axum routes for the quiz endpoints

pub mod ai;
pub mod generation;
pub mod http;
pub mod storage;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider};
pub use generation::LlmQuestionGenerator;
pub use http::{quiz_router, QuizAppState};
pub use storage::InMemoryFormSubmissionStore;
