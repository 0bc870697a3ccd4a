//! StartQuizHandler - Command handler that resets the session and generates questions.

use std::sync::Arc;

use crate::domain::quiz::{StartOutcome, QUESTION_COUNT};
use crate::ports::QuestionGenerator;

use super::SharedQuizSession;

/// Handler for starting (or restarting) the quiz.
///
/// The reset and the install each take the write lock briefly. Generation
/// runs in between without holding it, so concurrent readers see the
/// session as loading rather than blocking on the provider call.
pub struct StartQuizHandler {
    session: SharedQuizSession,
    generator: Arc<dyn QuestionGenerator>,
}

impl StartQuizHandler {
    pub fn new(session: SharedQuizSession, generator: Arc<dyn QuestionGenerator>) -> Self {
        Self { session, generator }
    }

    /// Resets progress and generates a new question set.
    ///
    /// Generation failures never escape: they are logged and reported as
    /// [`StartOutcome::NotReady`].
    pub async fn handle(&self) -> StartOutcome {
        let ticket = self.session.write().await.begin_start();
        let session_id = ticket.session_id();

        tracing::info!(%session_id, epoch = ticket.epoch(), "quiz reset, generating questions");

        let generated = self.generator.generate(session_id).await;
        let outcome = self.session.write().await.finish_start(ticket, generated);

        match &outcome {
            StartOutcome::Ready => {
                tracing::info!(
                    %session_id,
                    epoch = ticket.epoch(),
                    question_count = QUESTION_COUNT,
                    "question set installed"
                );
            }
            StartOutcome::NotReady { reason } => {
                tracing::error!(
                    %session_id,
                    error = %reason,
                    kind = reason.kind(),
                    "question generation failed; quiz stays not ready"
                );
            }
            StartOutcome::Superseded => {
                tracing::warn!(
                    %session_id,
                    epoch = ticket.epoch(),
                    "quiz restarted during generation; discarding question set"
                );
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::quiz::new_shared_session;
    use crate::domain::foundation::QuizSessionId;
    use crate::domain::quiz::{fixtures, Answer, GenerationError, QuestionSet, QuestionView};
    use crate::ports::AIError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Notify;

    enum Script {
        Succeed,
        FailProvider,
        FailSchema,
    }

    struct ScriptedGenerator {
        script: Mutex<Vec<Script>>,
    }

    impl ScriptedGenerator {
        fn new(script: Vec<Script>) -> Self {
            Self {
                script: Mutex::new(script),
            }
        }
    }

    #[async_trait]
    impl QuestionGenerator for ScriptedGenerator {
        async fn generate(&self, _: QuizSessionId) -> Result<QuestionSet, GenerationError> {
            let step = self.script.lock().unwrap().remove(0);
            match step {
                Script::Succeed => Ok(fixtures::question_set()),
                Script::FailProvider => Err(AIError::AuthenticationFailed.into()),
                Script::FailSchema => Err(GenerationError::schema("expected 12 questions, got 11")),
            }
        }
    }

    /// Blocks the first generation until released.
    struct GatedGenerator {
        gate: Arc<Notify>,
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl QuestionGenerator for GatedGenerator {
        async fn generate(&self, _: QuizSessionId) -> Result<QuestionSet, GenerationError> {
            let first = {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                *calls == 1
            };
            if first {
                self.gate.notified().await;
            }
            Ok(fixtures::question_set())
        }
    }

    #[tokio::test]
    async fn successful_generation_makes_session_ready() {
        let session = new_shared_session();
        let handler = StartQuizHandler::new(
            session.clone(),
            Arc::new(ScriptedGenerator::new(vec![Script::Succeed])),
        );

        let outcome = handler.handle().await;

        assert!(outcome.is_ready());
        let session = session.read().await;
        assert!(session.is_ready());
        assert_eq!(session.current_index(), 0);
    }

    #[tokio::test]
    async fn provider_failure_is_absorbed_as_not_ready() {
        let session = new_shared_session();
        let handler = StartQuizHandler::new(
            session.clone(),
            Arc::new(ScriptedGenerator::new(vec![Script::FailProvider])),
        );

        let outcome = handler.handle().await;

        assert!(matches!(
            outcome,
            StartOutcome::NotReady {
                reason: GenerationError::ProviderUnavailable(_)
            }
        ));
        assert_eq!(session.read().await.current_question(), QuestionView::Loading);
    }

    #[tokio::test]
    async fn restart_discards_progress_even_when_generation_fails() {
        let session = new_shared_session();
        let handler = StartQuizHandler::new(
            session.clone(),
            Arc::new(ScriptedGenerator::new(vec![Script::Succeed, Script::FailSchema])),
        );

        handler.handle().await;
        session
            .write()
            .await
            .submit_answer(Answer::parse("R", 0).unwrap());

        let outcome = handler.handle().await;

        assert!(!outcome.is_ready());
        let session = session.read().await;
        assert!(!session.is_ready());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.result().code(), "RIA");
        assert!(session.scores().iter().all(|(_, points)| points == 0));
    }

    #[tokio::test]
    async fn readers_see_loading_while_generation_is_in_flight() {
        let session = new_shared_session();
        let gate = Arc::new(Notify::new());
        let handler = Arc::new(StartQuizHandler::new(
            session.clone(),
            Arc::new(GatedGenerator {
                gate: gate.clone(),
                calls: Mutex::new(0),
            }),
        ));

        let task = tokio::spawn({
            let handler = handler.clone();
            async move { handler.handle().await }
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(session.read().await.current_question(), QuestionView::Loading);

        gate.notify_one();
        assert!(task.await.unwrap().is_ready());
        assert!(session.read().await.is_ready());
    }

    #[tokio::test]
    async fn later_start_supersedes_an_in_flight_one() {
        let session = new_shared_session();
        let gate = Arc::new(Notify::new());
        let handler = Arc::new(StartQuizHandler::new(
            session.clone(),
            Arc::new(GatedGenerator {
                gate: gate.clone(),
                calls: Mutex::new(0),
            }),
        ));

        let first = tokio::spawn({
            let handler = handler.clone();
            async move { handler.handle().await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;

        let second = handler.handle().await;
        assert!(second.is_ready());

        session
            .write()
            .await
            .submit_answer(Answer::parse("A", 1).unwrap());

        gate.notify_one();
        assert!(matches!(first.await.unwrap(), StartOutcome::Superseded));

        let session = session.read().await;
        assert_eq!(session.current_index(), 1);
        assert!(session.is_ready());
    }
}
