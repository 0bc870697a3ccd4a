//! Request and response DTOs for the quiz endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::quiz::{Category, QuestionView, QuizResult, Scores};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /answer`.
///
/// Fields are kept loose so out-of-range values reach the domain and are
/// rejected as invalid input rather than as a body decoding failure.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub riasec: String,
    pub option: i64,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartResponse {
    pub ready: bool,
}

/// Body of `GET /question`: exactly one of three shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuestionResponse {
    Loading {
        loading: bool,
    },
    Done {
        done: bool,
    },
    Question {
        riasec: Category,
        question: String,
        options: Vec<String>,
        step: usize,
        total: usize,
    },
}

impl From<QuestionView> for QuestionResponse {
    fn from(view: QuestionView) -> Self {
        match view {
            QuestionView::Loading => QuestionResponse::Loading { loading: true },
            QuestionView::Done => QuestionResponse::Done { done: true },
            QuestionView::Question {
                question,
                step,
                total,
            } => QuestionResponse::Question {
                riasec: question.category(),
                question: question.text().to_string(),
                options: question.options().to_vec(),
                step,
                total,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub ok: bool,
}

/// Body of `GET /result`. Scores serialize as a map in R, I, A, S, E, C order.
#[derive(Debug, Clone, Serialize)]
pub struct ResultResponse {
    pub code: String,
    pub scores: Scores,
}

impl From<QuizResult> for ResultResponse {
    fn from(result: QuizResult) -> Self {
        Self {
            code: result.code().to_string(),
            scores: *result.scores(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDataResponse {
    pub success: bool,
    pub message: String,
    pub total_submissions: usize,
}

impl FormDataResponse {
    pub fn stored(total_submissions: usize) -> Self {
        Self {
            success: true,
            message: "Form data stored successfully".to_string(),
            total_submissions,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            code: "INVALID_INPUT".to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::{fixtures, Answer, QuizSession};
    use serde_json::json;

    #[test]
    fn loading_and_done_serialize_as_single_flags() {
        let loading = serde_json::to_value(QuestionResponse::from(QuestionView::Loading)).unwrap();
        let done = serde_json::to_value(QuestionResponse::from(QuestionView::Done)).unwrap();

        assert_eq!(loading, json!({ "loading": true }));
        assert_eq!(done, json!({ "done": true }));
    }

    #[test]
    fn question_serializes_with_letter_and_progress() {
        let mut session = QuizSession::new();
        let ticket = session.begin_start();
        session.finish_start(ticket, Ok(fixtures::question_set()));
        session.submit_answer(Answer::parse("R", 0).unwrap());

        let body = serde_json::to_value(QuestionResponse::from(session.current_question())).unwrap();

        assert_eq!(body["riasec"], "I");
        assert_eq!(body["question"], "Scenario 2?");
        assert_eq!(body["options"].as_array().unwrap().len(), 4);
        assert_eq!(body["step"], 2);
        assert_eq!(body["total"], 12);
    }

    #[test]
    fn result_scores_keep_category_order() {
        let mut session = QuizSession::new();
        session.submit_answer(Answer::parse("C", 0).unwrap());

        let body = serde_json::to_string(&ResultResponse::from(session.result())).unwrap();

        assert_eq!(
            body,
            r#"{"code":"CRI","scores":{"R":0,"I":0,"A":0,"S":0,"E":0,"C":3}}"#
        );
    }

    #[test]
    fn form_data_response_matches_wire_shape() {
        let body = serde_json::to_value(FormDataResponse::stored(3)).unwrap();
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Form data stored successfully",
                "total_submissions": 3
            })
        );
    }

    #[test]
    fn error_response_invalid_input_creates_correctly() {
        let error = ErrorResponse::invalid_input("invalid option: must be between 0 and 3, got 5");
        assert_eq!(error.code, "INVALID_INPUT");
        assert!(error.message.contains("option"));
    }
}
