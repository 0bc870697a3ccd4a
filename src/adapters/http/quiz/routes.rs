//! HTTP routes for the quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_question, get_result, index, start_quiz, submit_answer, submit_form_data, QuizAppState,
};

/// Creates the quiz router with all endpoints.
///
/// # Routes
/// - `GET /` - Landing page
/// - `GET /start` - Reset and generate questions, returns `{ready}`
/// - `GET /question` - Current question, `{loading:true}` or `{done:true}`
/// - `POST /answer` - Submit `{riasec, option}`
/// - `GET /result` - Result code and scores
/// - `POST /formData` - Store an intake form
pub fn quiz_router(state: QuizAppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/start", get(start_quiz))
        .route("/question", get(get_question))
        .route("/answer", post(submit_answer))
        .route("/result", get(get_result))
        .route("/formData", post(submit_form_data))
        .with_state(state)
}
