//! Quiz session state and its transitions.
//!
//! A session is reset by `begin_start`, becomes ready once a question set is
//! installed by `finish_start`, and is advanced only by `submit_answer`.
//! Generation happens between the two start steps, outside any lock the
//! caller holds on the session, so readers polling during generation see
//! [`QuestionView::Loading`].

use crate::domain::foundation::{QuizSessionId, Timestamp};

use super::errors::GenerationError;
use super::question::{Question, QuestionSet};
use super::scoring::{Answer, QuizResult, Scores};

/// Proof that a reset happened; required to install a question set.
///
/// Each reset bumps the session epoch, so a ticket from an earlier start
/// cannot install questions into a session that has since been restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    session_id: QuizSessionId,
    epoch: u64,
}

impl GenerationTicket {
    pub fn session_id(&self) -> QuizSessionId {
        self.session_id
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// What `start` achieved.
#[derive(Debug)]
pub enum StartOutcome {
    /// Questions were generated and installed.
    Ready,
    /// Generation failed; the session stays not-ready.
    NotReady { reason: GenerationError },
    /// Another start reset the session while this one was generating.
    Superseded,
}

impl StartOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, StartOutcome::Ready)
    }
}

/// What the client should display next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionView {
    /// No question set yet.
    Loading,
    /// Every question has been answered.
    Done,
    /// The question at the current position.
    Question {
        question: Question,
        step: usize,
        total: usize,
    },
}

/// State of one quiz run.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: QuizSessionId,
    current_index: usize,
    scores: Scores,
    questions: Option<QuestionSet>,
    epoch: u64,
    started_at: Option<Timestamp>,
}

impl QuizSession {
    /// Creates an empty, not-ready session.
    pub fn new() -> Self {
        Self::with_id(QuizSessionId::new())
    }

    pub fn with_id(id: QuizSessionId) -> Self {
        Self {
            id,
            current_index: 0,
            scores: Scores::zero(),
            questions: None,
            epoch: 0,
            started_at: None,
        }
    }

    pub fn id(&self) -> QuizSessionId {
        self.id
    }

    pub fn is_ready(&self) -> bool {
        self.questions.is_some()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn questions(&self) -> Option<&QuestionSet> {
        self.questions.as_ref()
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    /// Discards all progress and returns the ticket for the generation
    /// that should follow.
    pub fn begin_start(&mut self) -> GenerationTicket {
        self.current_index = 0;
        self.scores = Scores::zero();
        self.questions = None;
        self.epoch += 1;
        self.started_at = Some(Timestamp::now());

        GenerationTicket {
            session_id: self.id,
            epoch: self.epoch,
        }
    }

    /// Installs the generated questions if the ticket is still current.
    pub fn finish_start(
        &mut self,
        ticket: GenerationTicket,
        generated: Result<QuestionSet, GenerationError>,
    ) -> StartOutcome {
        if ticket.session_id != self.id || ticket.epoch != self.epoch {
            return StartOutcome::Superseded;
        }

        match generated {
            Ok(questions) => {
                self.questions = Some(questions);
                StartOutcome::Ready
            }
            Err(reason) => {
                self.questions = None;
                StartOutcome::NotReady { reason }
            }
        }
    }

    /// Returns the question at the current position.
    pub fn current_question(&self) -> QuestionView {
        let Some(questions) = &self.questions else {
            return QuestionView::Loading;
        };

        match questions.get(self.current_index) {
            Some(question) => QuestionView::Question {
                question: question.clone(),
                step: self.current_index + 1,
                total: questions.len(),
            },
            None => QuestionView::Done,
        }
    }

    /// Scores an answer and advances to the next position.
    ///
    /// The answer's category is taken as given; it is not checked against
    /// the current question. Submissions past the last question still count
    /// and keep advancing the index. Returns the new index.
    pub fn submit_answer(&mut self, answer: Answer) -> usize {
        self.scores.add(answer.category(), answer.points());
        self.current_index += 1;
        self.current_index
    }

    /// Ranks the current scores into a result code.
    pub fn result(&self) -> QuizResult {
        QuizResult::from_scores(self.scores)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
