//! HTTP access to the log service.
//!
//! Both operations carry a request-level timeout so no tick can stall the
//! loop longer than the bound. Failures map into the app layer's
//! recoverable error types and are retried naturally on the next tick.

use std::time::Duration;

use harborwatch_app::{DispatchError, FetchError};
use harborwatch_proto::{EmergencyReport, LogReply};

/// Request-level timeout for fetch and dispatch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the log service endpoints.
#[derive(Debug, Clone)]
pub struct LogService {
    http: reqwest::Client,
    logs_url: String,
    emergency_url: String,
}

impl LogService {
    /// Build a client against a base URL such as `http://127.0.0.1:8000`.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base = base_url.trim_end_matches('/');
        Ok(Self {
            http,
            logs_url: format!("{base}/get_logs"),
            emergency_url: format!("{base}/send_emergency"),
        })
    }

    /// GET the full log.
    pub async fn fetch_log(&self) -> Result<LogReply, FetchError> {
        let response = self
            .http
            .get(&self.logs_url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(LogReply::from_json(&body)?)
    }

    /// POST an emergency message. Returns the raw response body.
    pub async fn dispatch(&self, report: &EmergencyReport) -> Result<String, DispatchError> {
        let response = self
            .http
            .post(&self.emergency_url)
            .json(report)
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| DispatchError::Transport(e.to_string()))
    }
}
