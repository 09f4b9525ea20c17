//! Application input events.

use harborwatch_proto::LogEntry;

use crate::KeyInput;

/// Events processed by the App state machine.
///
/// Events originate from two sources: keyboard input routed through the
/// line editor, and successful log fetches from the sync tick. Failed
/// fetches never reach the App; the runtime reports and drops them.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Full log fetched from the server, in append order.
    LogFetched {
        /// Every entry the server currently holds; the App applies only
        /// the suffix beyond its cursor.
        entries: Vec<LogEntry>,
    },
}
