//! Attachment domain model
//!
//! A file stored alongside a log entry. The same shape is used when
//! attachments are submitted with a new log and when they are read back,
//! so every field is optional and left out of the JSON when unset.

use serde::{Deserialize, Serialize};

/// A file attached to a log entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Identifier assigned by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Name under which the service stores the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Name of the file as uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    /// Log entry owning this attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_id: Option<i64>,
}

impl Attachment {
    /// Best name to show for this attachment
    ///
    /// Prefers the uploaded name, then the stored name.
    pub fn display_name(&self) -> &str {
        self.original_name
            .as_deref()
            .or(self.file_name.as_deref())
            .unwrap_or("<unnamed>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_are_omitted() {
        let attachment = Attachment {
            file_name: Some("1700000000-trace.txt".to_string()),
            mime_type: Some("text/plain".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&attachment).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "fileName": "1700000000-trace.txt",
                "mimeType": "text/plain"
            })
        );
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut attachment = Attachment::default();
        assert_eq!(attachment.display_name(), "<unnamed>");

        attachment.file_name = Some("stored.png".to_string());
        assert_eq!(attachment.display_name(), "stored.png");

        attachment.original_name = Some("screenshot.png".to_string());
        assert_eq!(attachment.display_name(), "screenshot.png");
    }
}
