//! Wire types for the port log service.
//!
//! The log service exposes an append-only event log as a JSON envelope:
//! `{"status": "success", "logs": [entry, ...]}`. The envelope shape is
//! validated strictly ([`LogReply`]), but individual entries are decoded
//! leniently: every field defaults independently, so a malformed entry can
//! never poison the batch it arrived in.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod classify;
mod entry;
mod reply;

pub use classify::EventKind;
pub use entry::{GLOBAL_SHIP_ID, LogEntry, MAX_FIELD_LEN};
pub use reply::{EmergencyReport, LogReply, ShapeError};
