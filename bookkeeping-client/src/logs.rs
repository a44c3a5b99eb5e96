//! Log-related API endpoints

use bookkeeping_core::domain::log::Log;
use bookkeeping_core::dto::log::{ArrayOfLogsResponse, CreateLog, LogListQuery, LogResponse};
use reqwest::Method;

use crate::BookkeepingClient;
use crate::error::{ClientError, Result};

impl BookkeepingClient {
    // =============================================================================
    // Log Management
    // =============================================================================

    /// Create a new log entry
    ///
    /// The request body is exactly the serialized `CreateLog`, so optional
    /// fields left unset are not sent.
    ///
    /// # Arguments
    /// * `req` - The log creation request
    ///
    /// # Returns
    /// The created log
    ///
    /// # Example
    /// ```no_run
    /// # use bookkeeping_client::BookkeepingClient;
    /// # use bookkeeping_core::dto::log::CreateLog;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BookkeepingClient::new("http://localhost:4000");
    /// let log = client
    ///     .create_log(&CreateLog::new("Beam dump", "Unexpected dump").with_parent_log_id(42))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_log(&self, req: &CreateLog) -> Result<Log> {
        let response = self.request(Method::POST, "/api/logs").json(req).send().await?;

        let body: LogResponse = self.handle_response(response).await?;
        Ok(body.data)
    }

    /// List logs, one page at a time
    ///
    /// # Arguments
    /// * `query` - Paging options; unset options are not sent
    ///
    /// # Returns
    /// The page of logs with its pagination metadata
    pub async fn list_logs(&self, query: &LogListQuery) -> Result<ArrayOfLogsResponse> {
        let response = self
            .request(Method::GET, "/api/logs")
            .query(&query.to_query_pairs())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a log by ID
    ///
    /// # Arguments
    /// * `log_id` - The log identifier
    ///
    /// # Returns
    /// The log details
    pub async fn get_log(&self, log_id: i64) -> Result<Log> {
        let response = self
            .request(Method::GET, &format!("/api/logs/{}", log_id))
            .send()
            .await?;

        match self.handle_response::<LogResponse>(response).await {
            Ok(body) => Ok(body.data),
            Err(e) if e.is_not_found() => Err(ClientError::NotFound(format!("log {}", log_id))),
            Err(e) => Err(e),
        }
    }
}
