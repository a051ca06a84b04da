use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Запись лога
///
/// `id` is assigned by the server and is absent on a draft that has not been
/// created yet. The server returned it as `uid` in earlier versions, so both
/// names are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default, alias = "uid", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Origin of the log, such as a component or class name.
    pub source: String,
    /// The log message itself.
    pub log: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl LogEntry {
    /// Empty draft, as the add form starts with.
    pub fn draft() -> Self {
        Self {
            id: None,
            source: String::new(),
            log: String::new(),
            timestamp: None,
        }
    }

    pub fn new(source: impl Into<String>, log: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            log: log.into(),
            ..Self::draft()
        }
    }

    /// Presence check applied before an entry is sent to the server.
    pub fn has_required_fields(&self) -> bool {
        !self.source.is_empty() && !self.log.is_empty()
    }
}

/// Body of delete / clear-all responses and of error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub detail: String,
}

impl Acknowledgment {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn draft_serializes_without_id_and_timestamp() {
        let value = serde_json::to_value(LogEntry::new("OrderProcessor", "done")).unwrap();
        assert_eq!(value, json!({ "source": "OrderProcessor", "log": "done" }));
    }

    #[test]
    fn accepts_uid_as_identifier() {
        let entry: LogEntry = serde_json::from_value(json!({
            "uid": 7,
            "source": "UserAuthenticator",
            "log": "User user_3 authentication successful (time: 0.21s)",
            "timestamp": "2024-03-15T14:02:26.123Z"
        }))
        .unwrap();
        assert_eq!(entry.id, Some(7));
        assert!(entry.timestamp.is_some());
    }

    #[test]
    fn identifier_is_written_as_id() {
        let mut entry = LogEntry::new("a", "b");
        entry.id = Some(3);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], 3);
        assert!(value.get("uid").is_none());
    }

    #[test]
    fn required_fields() {
        assert!(!LogEntry::draft().has_required_fields());
        assert!(!LogEntry::new("", "message").has_required_fields());
        assert!(!LogEntry::new("source", "").has_required_fields());
        assert!(LogEntry::new("source", "message").has_required_fields());
    }
}
