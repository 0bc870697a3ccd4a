//! Answer scoring, per-category tallies and result ranking.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::category::Category;
use super::errors::QuizError;
use super::question::OPTION_COUNT;

/// Points awarded per option index; the first-listed option scores highest.
pub const OPTION_SCORES: [u32; OPTION_COUNT] = [3, 2, 1, 0];

/// Number of categories that make up a result code.
pub const RESULT_CODE_LEN: usize = 3;

/// Returns the points for an option index, or `None` if out of range.
pub fn option_score(option: usize) -> Option<u32> {
    OPTION_SCORES.get(option).copied()
}

/// A validated answer submission. Never stored; only its points persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    category: Category,
    option: usize,
}

impl Answer {
    /// Creates an answer from wire values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the label is not one of `R I A S E C` or the
    /// option index is outside `0..=3`.
    pub fn parse(label: &str, option: i64) -> Result<Self, QuizError> {
        let category = label.parse::<Category>()?;
        let option = usize::try_from(option)
            .ok()
            .filter(|o| *o < OPTION_COUNT)
            .ok_or_else(|| {
                QuizError::invalid_input(
                    "option",
                    format!("must be between 0 and {}, got {}", OPTION_COUNT - 1, option),
                )
            })?;
        Ok(Self { category, option })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn option(&self) -> usize {
        self.option
    }

    /// Points this answer contributes to its category.
    pub fn points(&self) -> u32 {
        // option < OPTION_COUNT is checked in parse
        OPTION_SCORES[self.option]
    }
}

/// Accumulated points per category.
///
/// Iterates, serializes and ranks in canonical category order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores([u32; Category::COUNT]);

impl Scores {
    /// All-zero tally.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0[category.order_index()]
    }

    /// Adds points to a category.
    pub fn add(&mut self, category: Category, points: u32) {
        let slot = &mut self.0[category.order_index()];
        *slot = slot.saturating_add(points);
    }

    /// Iterates `(category, points)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::all().iter().map(move |c| (*c, self.get(*c)))
    }

    /// Categories sorted by points, highest first.
    ///
    /// The sort is stable, so tied categories keep canonical order.
    pub fn ranked(&self) -> Vec<(Category, u32)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, points) in self.iter() {
            map.serialize_entry(&category, &points)?;
        }
        map.end()
    }
}

/// Result derived on demand from a session's scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    code: String,
    scores: Scores,
}

impl QuizResult {
    /// Ranks the scores and takes the top three letters as the code.
    pub fn from_scores(scores: Scores) -> Self {
        let code = scores
            .ranked()
            .into_iter()
            .take(RESULT_CODE_LEN)
            .map(|(category, _)| category.letter())
            .collect();
        Self { code, scores }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }
}
