//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod intake;
pub mod quiz;

pub use intake::{SubmitIntakeFormHandler, SubmitIntakeFormResult};
pub use quiz::{
    new_shared_session, GetCurrentQuestionHandler, GetResultHandler, SharedQuizSession,
    StartQuizHandler, SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
};
