//! Parsing and validation of the provider's question payload.
//!
//! The payload is untrusted: it is decoded, shape-checked field by field and
//! reduced to text and options only. Any category labels the provider adds
//! are ignored.

use serde_json::Value;

use crate::domain::quiz::{GeneratedQuestion, GenerationError, QUESTION_COUNT};

/// Removes a surrounding Markdown code fence, if present.
///
/// Handles an opening fence with or without a language tag (```` ```json ````)
/// and a missing closing fence.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(after_open) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Skip the language tag on the opening line.
    let body = match after_open.find('\n') {
        Some(newline) => &after_open[newline + 1..],
        None => after_open.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Decodes the payload into exactly twelve unvalidated questions.
///
/// # Errors
///
/// - `MalformedResponse` if the text is not JSON after fence stripping
/// - `SchemaViolation` if it is not an array of twelve objects, each with a
///   string `question` and an `options` array of strings
pub fn parse_questions(raw: &str) -> Result<Vec<GeneratedQuestion>, GenerationError> {
    let payload: Value = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| GenerationError::malformed(format!("response is not valid JSON: {}", e)))?;

    let items = payload
        .as_array()
        .ok_or_else(|| GenerationError::schema("expected a JSON array of questions"))?;

    if items.len() != QUESTION_COUNT {
        return Err(GenerationError::schema(format!(
            "expected {} questions, got {}",
            QUESTION_COUNT,
            items.len()
        )));
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_item(i + 1, item))
        .collect()
}

fn parse_item(number: usize, item: &Value) -> Result<GeneratedQuestion, GenerationError> {
    let text = item
        .get("question")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            GenerationError::schema(format!("question {} is missing a \"question\" string", number))
        })?;

    let options = item
        .get("options")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            GenerationError::schema(format!("question {} is missing an \"options\" array", number))
        })?
        .iter()
        .map(|option| {
            option.as_str().map(str::to_string).ok_or_else(|| {
                GenerationError::schema(format!("question {} has a non-string option", number))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GeneratedQuestion::new(text, options))
}
