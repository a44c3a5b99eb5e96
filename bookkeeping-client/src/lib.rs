//! Bookkeeping HTTP Client
//!
//! A simple, type-safe HTTP client for the ALICE Bookkeeping log API.
//!
//! # Example
//!
//! ```no_run
//! use bookkeeping_client::BookkeepingClient;
//! use bookkeeping_core::dto::log::CreateLog;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BookkeepingClient::new("http://localhost:4000").with_token("secret");
//!
//!     let log = client
//!         .create_log(&CreateLog::new("Power failure", "Rack 3 lost power at 02:14"))
//!         .await?;
//!
//!     println!("Created log: {}", log.id);
//!     Ok(())
//! }
//! ```

mod api;
pub mod error;
mod logs;

// Re-export commonly used types
pub use api::LogApi;
pub use error::{ClientError, Result};

use bookkeeping_core::dto::error::ErrorResponse;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP client for the Bookkeeping API
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BookkeepingClient {
    /// Base URL of the service (e.g., "http://localhost:4000")
    base_url: String,
    /// API token, sent as the `token` query parameter
    token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl BookkeepingClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Bookkeeping service (e.g., "http://localhost:4000")
    ///
    /// # Example
    /// ```
    /// use bookkeeping_client::BookkeepingClient;
    ///
    /// let client = BookkeepingClient::new("http://localhost:4000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use bookkeeping_client::BookkeepingClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = BookkeepingClient::with_client("http://localhost:4000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client,
        }
    }

    /// Authenticate every request with the given API token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an API token is configured
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Start a request to `path` (relative to the base URL)
    ///
    /// The token, when configured, is appended as a query parameter.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Sending request");

        let builder = self.client.request(method, &url);
        match &self.token {
            Some(token) => builder.query(&[("token", token)]),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = error_message(&error_text);
            warn!(status = status.as_u16(), %message, "Bookkeeping API returned an error");
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

/// Extract a readable message from an error body
///
/// Uses the JSON:API error document when the body is one, the raw text otherwise.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|parsed| parsed.message().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
