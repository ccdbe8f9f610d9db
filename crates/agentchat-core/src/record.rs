use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One persisted chat turn.
///
/// The persisted field is named `type` because that is what pages already in
/// a user's session storage contain; `role` is accepted on read as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub content: String,
    #[serde(rename = "type", alias = "role")]
    pub role: Role,
    pub timestamp: String,
}

impl MessageRecord {
    /// Create a record stamped with the current UTC time
    pub fn new(content: impl Into<String>, role: Role) -> Self {
        Self {
            content: content.into(),
            role,
            timestamp: now_timestamp(),
        }
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2026-10-17T09:30:00.123Z`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_serializes_with_type_field() {
        let record = MessageRecord {
            content: "hi".to_string(),
            role: Role::User,
            timestamp: "2026-10-17T09:30:00.123Z".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "content": "hi",
                "type": "user",
                "timestamp": "2026-10-17T09:30:00.123Z"
            })
        );
    }

    #[test]
    fn test_record_accepts_role_alias() {
        let record: MessageRecord = serde_json::from_str(
            r#"{"content":"ok","role":"assistant","timestamp":"2026-10-17T09:30:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(record.role, Role::Assistant);
    }

    #[test]
    fn test_timestamp_is_iso8601_utc() {
        let ts = now_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
