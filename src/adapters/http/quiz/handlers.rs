//! HTTP handlers for the quiz endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::application::handlers::{
    GetCurrentQuestionHandler, GetResultHandler, SharedQuizSession, StartQuizHandler,
    SubmitAnswerCommand, SubmitAnswerHandler, SubmitIntakeFormHandler,
};
use crate::domain::intake::IntakeError;
use crate::domain::quiz::QuizError;
use crate::ports::{FormSubmissionRepository, QuestionGenerator};

use super::dto::{
    AnswerRequest, AnswerResponse, ErrorResponse, FormDataResponse, QuestionResponse,
    ResultResponse, StartResponse,
};

const INDEX_HTML: &str = include_str!("../../../../static/index.html");

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuizAppState {
    start_handler: Arc<StartQuizHandler>,
    question_handler: Arc<GetCurrentQuestionHandler>,
    answer_handler: Arc<SubmitAnswerHandler>,
    result_handler: Arc<GetResultHandler>,
    intake_handler: Arc<SubmitIntakeFormHandler>,
}

impl QuizAppState {
    pub fn new(
        start_handler: Arc<StartQuizHandler>,
        question_handler: Arc<GetCurrentQuestionHandler>,
        answer_handler: Arc<SubmitAnswerHandler>,
        result_handler: Arc<GetResultHandler>,
        intake_handler: Arc<SubmitIntakeFormHandler>,
    ) -> Self {
        Self {
            start_handler,
            question_handler,
            answer_handler,
            result_handler,
            intake_handler,
        }
    }

    /// Wires every handler onto one shared session.
    pub fn for_session(
        session: SharedQuizSession,
        generator: Arc<dyn QuestionGenerator>,
        forms: Arc<dyn FormSubmissionRepository>,
    ) -> Self {
        Self::new(
            Arc::new(StartQuizHandler::new(session.clone(), generator)),
            Arc::new(GetCurrentQuestionHandler::new(session.clone())),
            Arc::new(SubmitAnswerHandler::new(session.clone())),
            Arc::new(GetResultHandler::new(session)),
            Arc::new(SubmitIntakeFormHandler::new(forms)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /start - Reset the quiz and generate a new question set
pub async fn start_quiz(State(state): State<QuizAppState>) -> Json<StartResponse> {
    let outcome = state.start_handler.handle().await;
    Json(StartResponse {
        ready: outcome.is_ready(),
    })
}

/// GET /question - Current question, or a loading/done marker
pub async fn get_question(State(state): State<QuizAppState>) -> Json<QuestionResponse> {
    Json(state.question_handler.handle().await.into())
}

/// POST /answer - Score an answer and advance
pub async fn submit_answer(
    State(state): State<QuizAppState>,
    Json(req): Json<AnswerRequest>,
) -> Response {
    let cmd = SubmitAnswerCommand {
        riasec: req.riasec,
        option: req.option,
    };

    match state.answer_handler.handle(cmd).await {
        Ok(_) => (StatusCode::OK, Json(AnswerResponse { ok: true })).into_response(),
        Err(e) => handle_quiz_error(e),
    }
}

/// GET /result - Ranked result code and raw scores
pub async fn get_result(State(state): State<QuizAppState>) -> Json<ResultResponse> {
    Json(state.result_handler.handle().await.into())
}

/// POST /formData - Store an intake form
pub async fn submit_form_data(
    State(state): State<QuizAppState>,
    Json(payload): Json<Value>,
) -> Response {
    match state.intake_handler.handle(payload).await {
        Ok(result) => (
            StatusCode::OK,
            Json(FormDataResponse::stored(result.total_submissions)),
        )
            .into_response(),
        Err(e) => handle_intake_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_quiz_error(error: QuizError) -> Response {
    match error {
        err @ QuizError::InvalidInput { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::invalid_input(err.to_string())),
        )
            .into_response(),
    }
}

fn handle_intake_error(error: IntakeError) -> Response {
    match error {
        IntakeError::InvalidPayload(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(msg)),
        )
            .into_response(),
        IntakeError::Storage(msg) => {
            tracing::error!(error = %msg, "failed to store intake form");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to store form data")),
            )
                .into_response()
        }
    }
}
