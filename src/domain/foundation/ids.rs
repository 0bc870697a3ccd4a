//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a quiz session.
///
/// The server currently runs a single default session, but every session
/// carries an id so requests and logs can be correlated with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizSessionId(Uuid);

impl QuizSessionId {
    /// Creates a new random QuizSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a QuizSessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for QuizSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuizSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuizSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a stored intake form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Creates a new random SubmissionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_session_ids_are_unique() {
        assert_ne!(QuizSessionId::new(), QuizSessionId::new());
    }

    #[test]
    fn quiz_session_id_roundtrips_through_string() {
        let id = QuizSessionId::new();
        let parsed: QuizSessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn quiz_session_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<QuizSessionId>().is_err());
    }

    #[test]
    fn quiz_session_id_serializes_transparently() {
        let uuid = Uuid::new_v4();
        let id = QuizSessionId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}
