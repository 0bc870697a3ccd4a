//! Prompt construction for question generation.

use crate::domain::quiz::{CategorySchedule, OPTION_COUNT};

/// Builds the single prompt that requests the whole question set.
///
/// Each schedule position is listed with its category letter and intent so
/// the provider writes question `n` for the activity scheduled at `n`.
pub fn build_generation_prompt(schedule: &CategorySchedule) -> String {
    let assignments: String = schedule
        .iter()
        .enumerate()
        .map(|(i, category)| format!("{}. {}: {}\n", i + 1, category, category.intent()))
        .collect();

    format!(
        r#"Generate EXACTLY {count} UNIQUE scenario questions about everyday student life.

Rules:
- Do NOT mention psychology, personality types, career tests or RIASEC
- Use realistic situations a student could actually face
- Give exactly {options} answer options for every question
- Use simple, plain English
- RETURN ONLY A RAW JSON ARRAY, with no Markdown and no commentary
- Each array item must contain ONLY these fields:
  - "question": the scenario text
  - "options": an array of exactly {options} strings

Question number N must explore the activity assigned to N below:
{assignments}"#,
        count = schedule.len(),
        options = OPTION_COUNT,
        assignments = assignments,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::SCHEDULE;

    #[test]
    fn prompt_numbers_every_schedule_position() {
        let prompt = build_generation_prompt(&SCHEDULE);

        assert!(prompt.contains("1. R: hands-on work, tools, machines, physical tasks\n"));
        assert!(prompt.contains("6. C: organizing, planning, working with data and rules\n"));
        assert!(prompt.contains("7. R: hands-on work"));
        assert!(prompt.contains("12. C: organizing"));
        assert!(!prompt.contains("13."));
    }

    #[test]
    fn prompt_states_count_and_shape() {
        let prompt = build_generation_prompt(&SCHEDULE);

        assert!(prompt.contains("EXACTLY 12 UNIQUE"));
        assert!(prompt.contains("exactly 4 answer options"));
        assert!(prompt.contains("\"question\""));
        assert!(prompt.contains("\"options\""));
        assert!(prompt.contains("RAW JSON ARRAY"));
    }

    #[test]
    fn prompt_forbids_naming_the_assessment() {
        let prompt = build_generation_prompt(&SCHEDULE);

        assert!(prompt.contains("Do NOT mention"));
        let rule = prompt
            .lines()
            .find(|line| line.contains("Do NOT mention"))
            .unwrap();
        assert!(rule.contains("psychology"));
        assert!(rule.contains("personality types"));
        assert!(rule.contains("career tests"));
        assert!(rule.contains("RIASEC"));
    }
}
