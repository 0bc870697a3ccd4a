//! GetCurrentQuestionHandler - Query handler for the question to display next.

use crate::domain::quiz::QuestionView;

use super::SharedQuizSession;

/// Handler for reading the current question.
pub struct GetCurrentQuestionHandler {
    session: SharedQuizSession,
}

impl GetCurrentQuestionHandler {
    pub fn new(session: SharedQuizSession) -> Self {
        Self { session }
    }

    pub async fn handle(&self) -> QuestionView {
        self.session.read().await.current_question()
    }
}
