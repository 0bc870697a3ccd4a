//! The fixed category schedule that orders the twelve quiz questions.

use super::category::Category;

/// Number of questions in a quiz.
pub const QUESTION_COUNT: usize = 12;

/// Ordered list of the categories each question position must assess.
///
/// Every category appears exactly twice. Position `i` of the schedule is the
/// category of question `i`, both when prompting the provider and when
/// serving questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySchedule([Category; QUESTION_COUNT]);

/// The schedule used by every quiz.
pub const SCHEDULE: CategorySchedule = CategorySchedule([
    Category::Realistic,
    Category::Investigative,
    Category::Artistic,
    Category::Social,
    Category::Enterprising,
    Category::Conventional,
    Category::Realistic,
    Category::Investigative,
    Category::Artistic,
    Category::Social,
    Category::Enterprising,
    Category::Conventional,
]);

impl CategorySchedule {
    /// Returns the category at `index`, or `None` past the end.
    pub fn at(&self, index: usize) -> Option<Category> {
        self.0.get(index).copied()
    }

    /// Number of positions in the schedule.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the schedule in question order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_has_twelve_positions() {
        assert_eq!(SCHEDULE.len(), QUESTION_COUNT);
        assert!(!SCHEDULE.is_empty());
    }

    #[test]
    fn every_category_appears_exactly_twice() {
        for category in Category::all() {
            let count = SCHEDULE.iter().filter(|c| c == category).count();
            assert_eq!(count, 2, "{} appears {} times", category, count);
        }
    }

    #[test]
    fn schedule_cycles_through_riasec_twice() {
        let letters: String = SCHEDULE.iter().map(|c| c.letter()).collect();
        assert_eq!(letters, "RIASECRIASEC");
    }

    #[test]
    fn at_returns_none_past_the_end() {
        assert_eq!(SCHEDULE.at(0), Some(Category::Realistic));
        assert_eq!(SCHEDULE.at(11), Some(Category::Conventional));
        assert_eq!(SCHEDULE.at(12), None);
    }
}
