//! HTTP adapter for the quiz endpoints.
//!
//! All routes operate on the single shared quiz session.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerRequest, AnswerResponse, ErrorResponse, FormDataResponse, QuestionResponse,
    ResultResponse, StartResponse,
};
pub use handlers::QuizAppState;
pub use routes::quiz_router;
