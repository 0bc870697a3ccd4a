//! Quiz command and query handlers.
//!
//! Every handler works on the same [`SharedQuizSession`]. The server creates
//! one default session at startup and hands a clone of the handle to each
//! handler.

mod get_current_question;
mod get_result;
mod start_quiz;
mod submit_answer;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::quiz::QuizSession;

pub use get_current_question::GetCurrentQuestionHandler;
pub use get_result::GetResultHandler;
pub use start_quiz::StartQuizHandler;
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};

/// Handle to the quiz session shared by all handlers.
pub type SharedQuizSession = Arc<RwLock<QuizSession>>;

/// Creates a fresh, not-ready session behind a shared handle.
pub fn new_shared_session() -> SharedQuizSession {
    Arc::new(RwLock::new(QuizSession::new()))
}
