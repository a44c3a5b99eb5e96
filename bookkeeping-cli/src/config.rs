//! Configuration module
//!
//! Handles CLI configuration including the service URL and API token.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the Bookkeeping service
    pub base_url: String,

    /// API token, if the service requires one
    pub token: Option<String>,

    /// Print raw JSON instead of formatted output
    pub json: bool,
}
