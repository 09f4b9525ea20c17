//! Log service envelope types.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::LogEntry;

/// Envelope shape violations.
///
/// A bad envelope skips the whole tick; per-entry problems are handled by
/// lenient decoding in [`LogEntry`] and never surface here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// Body was not valid JSON.
    #[error("body is not valid JSON: {0}")]
    Json(String),

    /// `status` field absent or not the string `"success"`.
    #[error("missing or non-success status")]
    Status,

    /// `logs` field absent or not an array.
    #[error("missing logs array")]
    Logs,
}

/// Validated reply from the log endpoint.
///
/// Wire shape: `{"status": "success", "logs": [entry, ...]}`. The envelope
/// must be exactly right; the entries inside are decoded leniently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogReply {
    /// All log entries, in append order. The full log is returned on every
    /// fetch; the client selects the unseen suffix itself.
    pub entries: Vec<LogEntry>,
}

impl LogReply {
    /// Parse and shape-check a response body.
    pub fn from_json(body: &str) -> Result<Self, ShapeError> {
        let root: Value =
            serde_json::from_str(body).map_err(|e| ShapeError::Json(e.to_string()))?;

        let status = root.get("status").and_then(Value::as_str);
        if status != Some("success") {
            return Err(ShapeError::Status);
        }

        let logs = root.get("logs").and_then(Value::as_array).ok_or(ShapeError::Logs)?;
        let entries = logs.iter().map(LogEntry::from_value).collect();
        Ok(Self { entries })
    }
}

/// POST body for an operator emergency message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyReport {
    /// Operator-composed text.
    pub message: String,
}
