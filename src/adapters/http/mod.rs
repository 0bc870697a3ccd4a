//! HTTP adapters - REST API implementations.

pub mod quiz;

pub use quiz::{quiz_router, QuizAppState};
