//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (start, answer, intake) mutate state; queries (question, result)
//! only read it.

pub mod handlers;

pub use handlers::{
    // Quiz handlers
    new_shared_session, GetCurrentQuestionHandler, GetResultHandler, SharedQuizSession,
    StartQuizHandler, SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
    // Intake handlers
    SubmitIntakeFormHandler, SubmitIntakeFormResult,
};
