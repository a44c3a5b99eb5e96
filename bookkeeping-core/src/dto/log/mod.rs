//! Log DTOs for the Bookkeeping HTTP API

use serde::{Deserialize, Serialize};

use crate::domain::attachment::Attachment;
use crate::domain::log::Log;

/// Request to create a new log entry
///
/// `title` and `text` are always sent. The optional fields are left out of
/// the JSON entirely when unset, so the service can tell "not given" apart
/// from an explicit zero or empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLog {
    /// Short heading of the entry
    pub title: String,

    /// Body of the entry
    pub text: String,

    /// Existing log this entry replies to; unset for a new thread
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_log_id: Option<i64>,

    /// Runs this entry is about, sent verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_numbers: Option<String>,

    /// Files to attach; `Some(vec![])` is sent as an empty list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

impl CreateLog {
    /// Create a request carrying only the mandatory fields
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            parent_log_id: None,
            run_numbers: None,
            attachments: None,
        }
    }

    pub fn with_parent_log_id(mut self, parent_log_id: i64) -> Self {
        self.parent_log_id = Some(parent_log_id);
        self
    }

    pub fn with_run_numbers(mut self, run_numbers: impl Into<String>) -> Self {
        self.run_numbers = Some(run_numbers.into());
        self
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = Some(attachments);
        self
    }
}

/// Envelope around a single log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogResponse {
    pub data: Log,
}

/// Envelope around a page of logs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArrayOfLogsResponse {
    #[serde(default)]
    pub data: Vec<Log>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ArrayOfLogsResponseMeta>,
}

/// Metadata attached to a page of logs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArrayOfLogsResponseMeta {
    pub page: PaginationMeta,
}

/// Pagination counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page_count: u64,
    pub total_count: u64,
}

/// Paging options when listing logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogListQuery {
    /// Number of logs to skip
    pub offset: Option<u32>,

    /// Maximum number of logs to return
    pub limit: Option<u32>,
}

impl LogListQuery {
    /// Query parameters for the set options, in `page[...]` form
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(offset) = self.offset {
            pairs.push(("page[offset]", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("page[limit]", limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value
            .as_object()
            .expect("CreateLog serializes to an object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_required_fields_only() {
        let req = CreateLog::new("Power failure", "Rack 3 lost power at 02:14");

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Power failure",
                "text": "Rack 3 lost power at 02:14"
            })
        );
    }

    #[test]
    fn test_parent_log_id_is_emitted_when_set() {
        let req = CreateLog::new("Power failure", "Rack 3 lost power at 02:14").with_parent_log_id(42);

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(keys(&value), vec!["parentLogId", "text", "title"]);
        assert_eq!(value["parentLogId"], json!(42));
    }

    #[test]
    fn test_zero_parent_log_id_is_not_absent() {
        let req = CreateLog::new("t", "x").with_parent_log_id(0);

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["parentLogId"], json!(0));
    }

    #[test]
    fn test_every_subset_of_optional_fields() {
        for mask in 0u8..8 {
            let mut req = CreateLog::new("title", "text");
            let mut expected = vec!["text", "title"];
            if mask & 1 != 0 {
                req = req.with_parent_log_id(1);
                expected.push("parentLogId");
            }
            if mask & 2 != 0 {
                req = req.with_run_numbers("505");
                expected.push("runNumbers");
            }
            if mask & 4 != 0 {
                req = req.with_attachments(vec![Attachment::default()]);
                expected.push("attachments");
            }
            expected.sort_unstable();

            let value = serde_json::to_value(&req).unwrap();
            assert_eq!(keys(&value), expected, "mask {mask:03b}");
            assert!(value.as_object().unwrap().values().all(|v| !v.is_null()));
        }
    }

    #[test]
    fn test_empty_attachments_differ_from_absent() {
        let absent = serde_json::to_value(CreateLog::new("t", "x")).unwrap();
        let empty = serde_json::to_value(CreateLog::new("t", "x").with_attachments(Vec::new())).unwrap();

        assert!(absent.get("attachments").is_none());
        assert_eq!(empty["attachments"], json!([]));
    }

    #[test]
    fn test_round_trip_preserves_absence() {
        let sparse = CreateLog::new("Beam dump", "Unexpected dump").with_run_numbers("505, 506");
        let full = CreateLog::new("Beam dump", "Unexpected dump")
            .with_parent_log_id(9)
            .with_attachments(vec![Attachment {
                file_name: Some("dump.log".to_string()),
                ..Default::default()
            }]);

        for req in [sparse, full] {
            let json = serde_json::to_string(&req).unwrap();
            let decoded: CreateLog = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, req);
        }
    }

    #[test]
    fn test_run_numbers_are_not_interpreted() {
        let req = CreateLog::new("t", "x").with_run_numbers(" 1,2  3 ");

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["runNumbers"], json!(" 1,2  3 "));
    }

    #[test]
    fn test_array_of_logs_response() {
        let body: ArrayOfLogsResponse = serde_json::from_value(json!({
            "data": [
                { "id": 1, "title": "a", "text": "b" },
                { "id": 2, "title": "c", "text": "d", "parentLogId": 1 }
            ],
            "meta": { "page": { "pageCount": 3, "totalCount": 25 } }
        }))
        .unwrap();

        assert_eq!(body.data.len(), 2);
        assert_eq!(
            body.meta.map(|m| m.page),
            Some(PaginationMeta {
                page_count: 3,
                total_count: 25
            })
        );

        let empty: ArrayOfLogsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.data.is_empty());
        assert!(empty.meta.is_none());
    }

    #[test]
    fn test_list_query_pairs() {
        assert!(LogListQuery::default().to_query_pairs().is_empty());

        let query = LogListQuery {
            offset: Some(20),
            limit: Some(10),
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![("page[offset]", "20".to_string()), ("page[limit]", "10".to_string())]
        );

        let limit_only = LogListQuery {
            offset: None,
            limit: Some(5),
        };
        assert_eq!(limit_only.to_query_pairs(), vec![("page[limit]", "5".to_string())]);
    }
}
