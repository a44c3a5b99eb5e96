//! Error DTOs
//!
//! The service reports failures as a JSON:API error document.

use serde::{Deserialize, Serialize};

/// Error body returned with non-success status codes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiErrorObject>,
}

/// A single error in an [`ErrorResponse`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// HTTP status as a string (e.g. "400")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    /// Most specific message carried by the first error, if any
    pub fn message(&self) -> Option<&str> {
        let first = self.errors.first()?;
        first.detail.as_deref().or(first.title.as_deref())
    }
}
