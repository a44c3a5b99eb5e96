//! User domain types

use serde::{Deserialize, Serialize};

/// Author of a log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    /// Identifier of the user in the external identity provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<i64>,

    pub name: String,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
