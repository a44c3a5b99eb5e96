//! Log domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::attachment::Attachment;
use crate::domain::user::User;

/// A log entry stored by the Bookkeeping service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub id: i64,
    pub title: String,
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<LogOrigin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<LogSubtype>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,

    /// Creation time, epoch milliseconds on the wire
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// Log this entry replies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_log_id: Option<i64>,

    /// First log of the thread this entry belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_log_id: Option<i64>,

    /// Number of replies to this entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<i64>,

    #[serde(default)]
    pub attachments: Vec<Attachment>,

    #[serde(default)]
    pub runs: Vec<LogRun>,
}

impl Log {
    /// Whether this entry starts a thread
    pub fn is_root(&self) -> bool {
        self.parent_log_id.is_none()
    }

    /// Run numbers this entry is associated with
    pub fn run_numbers(&self) -> Vec<i64> {
        self.runs.iter().map(|run| run.run_number).collect()
    }
}

/// A run referenced by a log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRun {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub run_number: i64,
}

/// Who produced a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOrigin {
    Human,
    Process,
}

/// Kind of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSubtype {
    Run,
    Subsystem,
    Announcement,
    Intervention,
    Comment,
}

impl std::fmt::Display for LogOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogOrigin::Human => write!(f, "human"),
            LogOrigin::Process => write!(f, "process"),
        }
    }
}

impl std::fmt::Display for LogSubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogSubtype::Run => write!(f, "run"),
            LogSubtype::Subsystem => write!(f, "subsystem"),
            LogSubtype::Announcement => write!(f, "announcement"),
            LogSubtype::Intervention => write!(f, "intervention"),
            LogSubtype::Comment => write!(f, "comment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_log_from_service_payload() {
        let payload = serde_json::json!({
            "id": 7,
            "title": "Power failure",
            "text": "Rack 3 lost power at 02:14",
            "origin": "human",
            "subtype": "run",
            "author": { "id": 1, "externalId": 1000, "name": "John Doe" },
            "createdAt": 1_700_000_000_000_i64,
            "parentLogId": 3,
            "rootLogId": 1,
            "replies": 0,
            "attachments": [{ "id": 2, "fileName": "a.txt", "logId": 7 }],
            "runs": [{ "id": 11, "runNumber": 505 }, { "id": 12, "runNumber": 506 }]
        });

        let log: Log = serde_json::from_value(payload).unwrap();
        assert_eq!(log.id, 7);
        assert_eq!(log.origin, Some(LogOrigin::Human));
        assert_eq!(log.subtype, Some(LogSubtype::Run));
        assert_eq!(log.author.as_ref().map(|a| a.name.as_str()), Some("John Doe"));
        assert_eq!(
            log.created_at,
            Some(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
        );
        assert!(!log.is_root());
        assert_eq!(log.attachments.len(), 1);
        assert_eq!(log.run_numbers(), vec![505, 506]);
    }

    #[test]
    fn test_log_with_minimal_payload() {
        let payload = serde_json::json!({
            "id": 1,
            "title": "Shift start",
            "text": "All nominal"
        });

        let log: Log = serde_json::from_value(payload).unwrap();
        assert!(log.is_root());
        assert_eq!(log.created_at, None);
        assert!(log.attachments.is_empty());
        assert!(log.run_numbers().is_empty());
    }

    #[test]
    fn test_subtype_display_matches_wire_name() {
        let wire = serde_json::to_value(LogSubtype::Intervention).unwrap();
        assert_eq!(wire, serde_json::json!(LogSubtype::Intervention.to_string()));
    }
}
