//! Quiz domain module.
//!
//! Twelve scenario questions, two per RIASEC category, are generated once per
//! run, served in schedule order and scored as they are answered. The result
//! is the three highest-scoring category letters.
//!
//! # Components
//!
//! - `Category` / `SCHEDULE` - the six categories and the fixed question order
//! - `QuestionSet` - validated questions bound to the schedule
//! - `Scores` / `QuizResult` - point tally and ranking
//! - `QuizSession` - start, serve, answer and result transitions

mod category;
mod errors;
mod question;
mod schedule;
mod scoring;
mod session;

pub use category::Category;
pub use errors::{GenerationError, QuizError};
pub use question::{GeneratedQuestion, Question, QuestionSet, OPTION_COUNT};
pub use schedule::{CategorySchedule, QUESTION_COUNT, SCHEDULE};
pub use scoring::{option_score, Answer, QuizResult, Scores, OPTION_SCORES, RESULT_CODE_LEN};
pub use session::{GenerationTicket, QuestionView, QuizSession, StartOutcome};

#[cfg(test)]
pub(crate) use question::fixtures;
