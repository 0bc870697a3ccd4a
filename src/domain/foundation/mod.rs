//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers and value objects shared by the quiz and
//! intake domains.

mod ids;
mod timestamp;

pub use ids::{QuizSessionId, SubmissionId};
pub use timestamp::Timestamp;
