//! SubmitAnswerHandler - Command handler for scoring an answer.

use crate::domain::quiz::{Answer, Category, QuizError};

use super::SharedQuizSession;

/// Command to submit an answer, carrying the raw wire values.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub riasec: String,
    pub option: i64,
}

/// Result of an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitAnswerResult {
    pub category: Category,
    pub points: u32,
    /// Session index after the answer was recorded.
    pub current_index: usize,
}

/// Handler for submitting answers.
pub struct SubmitAnswerHandler {
    session: SharedQuizSession,
}

impl SubmitAnswerHandler {
    pub fn new(session: SharedQuizSession) -> Self {
        Self { session }
    }

    /// Validates the answer, then scores it and advances the session.
    ///
    /// An invalid answer leaves the session untouched.
    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<SubmitAnswerResult, QuizError> {
        let answer = match Answer::parse(&cmd.riasec, cmd.option) {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(riasec = %cmd.riasec, option = cmd.option, error = %err, "answer rejected");
                return Err(err);
            }
        };

        let mut session = self.session.write().await;
        let current_index = session.submit_answer(answer);

        tracing::debug!(
            session_id = %session.id(),
            category = %answer.category(),
            points = answer.points(),
            current_index,
            "answer recorded"
        );

        Ok(SubmitAnswerResult {
            category: answer.category(),
            points: answer.points(),
            current_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::quiz::new_shared_session;

    fn cmd(riasec: &str, option: i64) -> SubmitAnswerCommand {
        SubmitAnswerCommand {
            riasec: riasec.to_string(),
            option,
        }
    }

    #[tokio::test]
    async fn scores_and_advances() {
        let session = new_shared_session();
        let handler = SubmitAnswerHandler::new(session.clone());

        let result = handler.handle(cmd("E", 0)).await.unwrap();

        assert_eq!(result.category, Category::Enterprising);
        assert_eq!(result.points, 3);
        assert_eq!(result.current_index, 1);
        assert_eq!(session.read().await.scores().get(Category::Enterprising), 3);
    }

    #[tokio::test]
    async fn option_out_of_range_leaves_scores_unchanged() {
        let session = new_shared_session();
        let handler = SubmitAnswerHandler::new(session.clone());
        handler.handle(cmd("I", 1)).await.unwrap();

        let err = handler.handle(cmd("I", 5)).await.unwrap_err();

        assert!(matches!(err, QuizError::InvalidInput { ref field, .. } if field == "option"));
        let session = session.read().await;
        assert_eq!(session.scores().get(Category::Investigative), 2);
        assert_eq!(session.current_index(), 1);
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let session = new_shared_session();
        let handler = SubmitAnswerHandler::new(session.clone());

        let err = handler.handle(cmd("X", 0)).await.unwrap_err();

        assert!(matches!(err, QuizError::InvalidInput { ref field, .. } if field == "riasec"));
        assert_eq!(session.read().await.current_index(), 0);
    }

    #[tokio::test]
    async fn keeps_advancing_past_the_last_question() {
        let session = new_shared_session();
        let handler = SubmitAnswerHandler::new(session.clone());

        let mut last = 0;
        for _ in 0..14 {
            last = handler.handle(cmd("C", 3)).await.unwrap().current_index;
        }

        assert_eq!(last, 14);
    }

    #[tokio::test]
    async fn concurrent_submissions_are_not_lost() {
        let session = new_shared_session();
        let handler = std::sync::Arc::new(SubmitAnswerHandler::new(session.clone()));

        let tasks: Vec<_> = (0..24)
            .map(|_| {
                let handler = handler.clone();
                tokio::spawn(async move { handler.handle(cmd("A", 1)).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let session = session.read().await;
        assert_eq!(session.current_index(), 24);
        assert_eq!(session.scores().get(Category::Artistic), 48);
    }
}
