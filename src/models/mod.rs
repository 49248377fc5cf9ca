use serde::{Deserialize, Serialize};

/// A note as returned by the backend.
///
/// The client only ever holds a read-only copy; every mutation refetches the list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,

    /// Raw timestamp string as sent by the backend (RFC 3339 or `YYYY-MM-DD`).
    #[serde(rename = "createdAt", alias = "created_at", default)]
    pub created_at: String,
}

/// Request body for create/update.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NoteInput {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Severity {
    Success,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_contract_deserialize_camel_case() {
        let json = r#"{"id":"1","title":"T","content":"C","createdAt":"2024-01-01"}"#;
        let note: Note = serde_json::from_str(json).expect("note should parse");
        assert_eq!(note.id, "1");
        assert_eq!(note.created_at, "2024-01-01");
    }

    #[test]
    fn test_note_accepts_snake_case_timestamp() {
        let json = r#"{"id":"2","title":"T","content":"C","created_at":"2024-02-03T10:00:00Z"}"#;
        let note: Note = serde_json::from_str(json).expect("note should parse");
        assert_eq!(note.created_at, "2024-02-03T10:00:00Z");
    }

    #[test]
    fn test_severity_tags_are_lowercase() {
        assert_eq!(Severity::Success.as_ref(), "success");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.as_ref(), "error");
    }
}
