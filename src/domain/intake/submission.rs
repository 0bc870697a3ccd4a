//! FormSubmission value object.

use serde_json::{Map, Value};

use crate::domain::foundation::{SubmissionId, Timestamp};

use super::errors::IntakeError;

/// A received intake form, stored verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    id: SubmissionId,
    received_at: Timestamp,
    fields: Map<String, Value>,
}

impl FormSubmission {
    /// Accepts any JSON object; every other JSON value is rejected.
    pub fn from_json(payload: Value) -> Result<Self, IntakeError> {
        match payload {
            Value::Object(fields) => Ok(Self {
                id: SubmissionId::new(),
                received_at: Timestamp::now(),
                fields,
            }),
            other => Err(IntakeError::invalid_payload(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn received_at(&self) -> Timestamp {
        self.received_at
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
