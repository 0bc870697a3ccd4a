//! Question value objects and the schedule-bound question set.

use super::category::Category;
use super::errors::GenerationError;
use super::schedule::{QUESTION_COUNT, SCHEDULE};

/// Number of answer options per question.
pub const OPTION_COUNT: usize = 4;

/// A question as produced by the provider, before validation.
///
/// Carries no category: whatever the provider claimed about categories is
/// discarded before this type is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuestion {
    pub text: String,
    pub options: Vec<String>,
}

impl GeneratedQuestion {
    pub fn new(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }
}

/// A validated quiz question bound to its scheduled category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    category: Category,
    text: String,
    options: [String; OPTION_COUNT],
}

impl Question {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }
}

/// Exactly twelve questions, positionally aligned with [`SCHEDULE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Validates generated drafts and assigns each the category scheduled
    /// for its position.
    ///
    /// # Errors
    ///
    /// Returns `SchemaViolation` if there are not exactly twelve drafts, or if
    /// any draft has blank text or does not have exactly four options.
    pub fn bind(drafts: Vec<GeneratedQuestion>) -> Result<Self, GenerationError> {
        if drafts.len() != QUESTION_COUNT {
            return Err(GenerationError::schema(format!(
                "expected {} questions, got {}",
                QUESTION_COUNT,
                drafts.len()
            )));
        }

        let questions = drafts
            .into_iter()
            .zip(SCHEDULE.iter())
            .enumerate()
            .map(|(position, (draft, category))| bind_one(position, draft, category))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { questions })
    }

    /// Returns the question at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

fn bind_one(
    position: usize,
    draft: GeneratedQuestion,
    category: Category,
) -> Result<Question, GenerationError> {
    let number = position + 1;

    if draft.text.trim().is_empty() {
        return Err(GenerationError::schema(format!(
            "question {} has empty text",
            number
        )));
    }

    let option_count = draft.options.len();
    let options: [String; OPTION_COUNT] = draft.options.try_into().map_err(|_| {
        GenerationError::schema(format!(
            "question {} has {} options, expected {}",
            number, option_count, OPTION_COUNT
        ))
    })?;

    Ok(Question {
        category,
        text: draft.text,
        options,
    })
}
