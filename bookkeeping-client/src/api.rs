//! Trait over the log endpoints
//!
//! Front-ends depend on this trait rather than on the HTTP client so they
//! can be exercised against an in-memory implementation.

use async_trait::async_trait;
use bookkeeping_core::domain::log::Log;
use bookkeeping_core::dto::log::{ArrayOfLogsResponse, CreateLog, LogListQuery};

use crate::BookkeepingClient;
use crate::error::Result;

/// Operations on Bookkeeping log entries
#[async_trait]
pub trait LogApi: Send + Sync {
    /// Create a log entry and return it as stored
    async fn create_log(&self, req: &CreateLog) -> Result<Log>;

    /// Fetch one page of logs
    async fn list_logs(&self, query: &LogListQuery) -> Result<ArrayOfLogsResponse>;

    /// Fetch a single log
    async fn get_log(&self, log_id: i64) -> Result<Log>;
}

#[async_trait]
impl LogApi for BookkeepingClient {
    async fn create_log(&self, req: &CreateLog) -> Result<Log> {
        BookkeepingClient::create_log(self, req).await
    }

    async fn list_logs(&self, query: &LogListQuery) -> Result<ArrayOfLogsResponse> {
        BookkeepingClient::list_logs(self, query).await
    }

    async fn get_log(&self, log_id: i64) -> Result<Log> {
        BookkeepingClient::get_log(self, log_id).await
    }
}
