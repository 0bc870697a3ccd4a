//! GetResultHandler - Query handler for the ranked result code.

use crate::domain::quiz::QuizResult;

use super::SharedQuizSession;

/// Handler for computing the result from the current tally.
///
/// The result is derived on every call and never stored.
pub struct GetResultHandler {
    session: SharedQuizSession,
}

impl GetResultHandler {
    pub fn new(session: SharedQuizSession) -> Self {
        Self { session }
    }

    pub async fn handle(&self) -> QuizResult {
        self.session.read().await.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::quiz::new_shared_session;
    use crate::domain::quiz::Answer;

    #[tokio::test]
    async fn all_zero_scores_rank_in_category_order() {
        let handler = GetResultHandler::new(new_shared_session());
        assert_eq!(handler.handle().await.code(), "RIA");
    }

    #[tokio::test]
    async fn reflects_answers_recorded_so_far() {
        let session = new_shared_session();
        {
            let mut session = session.write().await;
            for (label, option) in [("C", 0), ("C", 0), ("S", 0), ("E", 1)] {
                session.submit_answer(Answer::parse(label, option).unwrap());
            }
        }
        let handler = GetResultHandler::new(session);

        assert_eq!(handler.handle().await.code(), "CSE");
    }
}
