//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific
//! I/O implementations. The production driver uses crossterm for keyboard
//! events and reqwest for HTTP; tests substitute scripted drivers with
//! virtual time.

use std::{future::Future, ops::Sub, time::Duration};

use harborwatch_proto::{EmergencyReport, LogReply, ShapeError};
use thiserror::Error;

use crate::{Echo, KeyInput};

/// Recoverable failures of one log fetch.
///
/// A fetch failure aborts the current sync tick only; the cursor is
/// unchanged and the next tick retries from scratch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Endpoint unreachable, request timed out, or body unreadable.
    #[error("transport: {0}")]
    Transport(String),

    /// Server replied with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),

    /// Body parsed but the envelope shape was invalid.
    #[error("malformed payload: {0}")]
    Shape(#[from] ShapeError),
}

/// Recoverable failures of one message dispatch.
///
/// Dispatch failure is logged and dropped; it never propagates to the
/// polling path.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Endpoint unreachable or request timed out.
    #[error("transport: {0}")]
    Transport(String),

    /// Server replied with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),
}

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration. Every wait a driver
/// performs must carry an explicit bound; no method may block
/// indefinitely.
///
/// # Associated Types
///
/// - [`Error`](Driver::Error): fatal platform errors (terminal I/O)
/// - [`Instant`](Driver::Instant): time representation (real or virtual)
pub trait Driver: Send {
    /// Fatal platform error type. Recoverable network failures use
    /// [`FetchError`]/[`DispatchError`] instead.
    type Error: std::error::Error + Send + 'static;

    /// Time instant type. Enables virtual time in tests.
    type Instant: Copy + Ord + Send + Sync + Sub<Output = Duration>;

    /// Fetch the full remote log. Must be bounded by a request timeout.
    fn fetch_log(&mut self) -> impl Future<Output = Result<LogReply, FetchError>> + Send;

    /// Post an operator emergency message. Returns the raw response body,
    /// which is logged but never parsed. Must be bounded by a request
    /// timeout.
    fn dispatch(
        &mut self,
        report: EmergencyReport,
    ) -> impl Future<Output = Result<String, DispatchError>> + Send;

    /// Poll for one key press, waiting at most the input poll timeout.
    ///
    /// Returns `None` when no input is ready within the bound.
    fn poll_key(&mut self) -> impl Future<Output = Result<Option<KeyInput>, Self::Error>> + Send;

    /// Sleep for the fixed idle period between loop iterations.
    fn idle(&mut self) -> impl Future<Output = ()> + Send;

    /// Current time instant.
    fn now(&self) -> Self::Instant;

    /// Write one line to the operator console.
    fn console_line(&mut self, line: &str) -> Result<(), Self::Error>;

    /// Echo in-progress input editing.
    fn echo(&mut self, echo: Echo) -> Result<(), Self::Error>;
}
