//! Question generation adapters.
//!
//! `LlmQuestionGenerator` implements the QuestionGenerator port on top of any
//! AIProvider: it builds the schedule prompt, makes one completion call, and
//! validates the payload before binding it to the schedule.

mod llm_question_generator;
mod prompt;
mod response_parser;

pub use llm_question_generator::LlmQuestionGenerator;
pub use prompt::build_generation_prompt;
pub use response_parser::{parse_questions, strip_code_fence};
