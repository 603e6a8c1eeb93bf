//! Feedback records as served by the backend

use serde::{Deserialize, Deserializer, Serialize};

/// Classification input used when an entry carries no suggestion text
pub const UNKNOWN_SUGGESTION: &str = "unknown";

/// One stored review-feedback row.
///
/// Only `suggestion` feeds classification. The typed optional fields are shown
/// in the detail pane; anything else the backend sends is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub decision: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub suggestion_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FeedbackEntry {
    pub fn with_suggestion(text: impl Into<String>) -> Self {
        Self {
            suggestion: Some(text.into()),
            ..Self::default()
        }
    }

    /// Text fed to the classifier; empty and missing both fall back
    pub fn classification_text(&self) -> &str {
        self.suggestion
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SUGGESTION)
    }
}

/// Accept strings, treat null and non-string values as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_row() {
        let json = r#"{
            "id": 12,
            "suggestion": "Missing semicolon",
            "language": "javascript",
            "decision": "accepted",
            "suggestion_type": "Syntax Error",
            "created_at": "2025-01-02T03:04:05Z",
            "team_id": "t-1"
        }"#;
        let entry: FeedbackEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.suggestion.as_deref(), Some("Missing semicolon"));
        assert_eq!(entry.language.as_deref(), Some("javascript"));
        assert_eq!(entry.decision.as_deref(), Some("accepted"));
        assert_eq!(entry.extra.get("team_id").and_then(|v| v.as_str()), Some("t-1"));
    }

    #[test]
    fn test_missing_suggestion_defaults_to_unknown() {
        let entry: FeedbackEntry = serde_json::from_str(r#"{"language":"cpp"}"#).unwrap();
        assert_eq!(entry.suggestion, None);
        assert_eq!(entry.classification_text(), UNKNOWN_SUGGESTION);
    }

    #[test]
    fn test_null_and_non_string_suggestion() {
        let entry: FeedbackEntry = serde_json::from_str(r#"{"suggestion":null}"#).unwrap();
        assert_eq!(entry.classification_text(), UNKNOWN_SUGGESTION);

        let entry: FeedbackEntry = serde_json::from_str(r#"{"suggestion":42}"#).unwrap();
        assert_eq!(entry.classification_text(), UNKNOWN_SUGGESTION);

        let entry: FeedbackEntry = serde_json::from_str(r#"{"suggestion":""}"#).unwrap();
        assert_eq!(entry.classification_text(), UNKNOWN_SUGGESTION);
    }
}
