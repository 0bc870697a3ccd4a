//! Category enum representing the six RIASEC interest areas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::QuizError;

/// The six interest categories, in their canonical declaration order.
///
/// The declaration order matters: it is the iteration order of score
/// tallies and therefore the tie-break order when ranking results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 6;

    /// Returns all categories in canonical order.
    pub fn all() -> &'static [Category; Category::COUNT] {
        &[
            Category::Realistic,
            Category::Investigative,
            Category::Artistic,
            Category::Social,
            Category::Enterprising,
            Category::Conventional,
        ]
    }

    /// Returns the 0-based position of this category in canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            Category::Realistic => 0,
            Category::Investigative => 1,
            Category::Artistic => 2,
            Category::Social => 3,
            Category::Enterprising => 4,
            Category::Conventional => 5,
        }
    }

    /// Returns the single-letter label used on the wire and in result codes.
    pub fn letter(&self) -> char {
        match self {
            Category::Realistic => 'R',
            Category::Investigative => 'I',
            Category::Artistic => 'A',
            Category::Social => 'S',
            Category::Enterprising => 'E',
            Category::Conventional => 'C',
        }
    }

    /// Returns the activity description used when prompting for questions.
    pub fn intent(&self) -> &'static str {
        match self {
            Category::Realistic => "hands-on work, tools, machines, physical tasks",
            Category::Investigative => "problem solving, logic, analysis, critical thinking",
            Category::Artistic => "creativity, imagination, design, expression",
            Category::Social => "helping, teaching, guiding, supporting people",
            Category::Enterprising => "leading, persuading, decision making, business thinking",
            Category::Conventional => "organizing, planning, working with data and rules",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Category {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(Category::Realistic),
            "I" => Ok(Category::Investigative),
            "A" => Ok(Category::Artistic),
            "S" => Ok(Category::Social),
            "E" => Ok(Category::Enterprising),
            "C" => Ok(Category::Conventional),
            other => Err(QuizError::invalid_input(
                "riasec",
                format!("unknown category '{}', expected one of R, I, A, S, E, C", other),
            )),
        }
    }
}
