//! Lenient log entry decoding.
//!
//! Entries come from a simulation that has been observed to emit partial or
//! mistyped records. Each field is extracted and defaulted independently so
//! one bad field never discards the rest of the entry, and one bad entry
//! never aborts the batch.

use serde_json::Value;

/// Maximum length in characters for any string field of an entry.
///
/// Server-supplied strings are truncated to this length on decode. This
/// bounds registry memory against adversarial or runaway payloads.
pub const MAX_FIELD_LEN: usize = 63;

/// Sentinel ship id carried by global (non-ship-specific) emergencies.
pub const GLOBAL_SHIP_ID: i64 = 0;

/// Ship id substituted when an entry omits or mistypes `ship_id`.
const DEFAULT_SHIP_ID: i64 = -1;

/// One event from the remote append-only log.
///
/// Every field is optional on the wire; decoding substitutes defaults
/// (`"N/A"` for display strings, `-1` for the ship id, `""` for the
/// message, `"unknown"` for the event type) rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Ship identifier. `-1` when absent, `0` marks a global emergency.
    pub ship_id: i64,
    /// Ship display name.
    pub ship_name: String,
    /// Zone the ship reported from.
    pub current_zone: String,
    /// Timestamp string as supplied by the simulation.
    pub timestamp: String,
    /// Event type tag. Defaults to `"unknown"`.
    pub event_type: String,
    /// Free-form message (emergencies carry the operator text here).
    pub message: String,
    /// Whether the entry carried a `parked_terminal` field. Only presence
    /// is meaningful; the terminal number itself is not tracked.
    pub parked: bool,
}

impl LogEntry {
    /// Decode an entry from a JSON value, defaulting each field
    /// independently. Never fails: a non-object decodes to all defaults.
    pub fn from_value(value: &Value) -> Self {
        Self {
            ship_id: value.get("ship_id").and_then(Value::as_i64).unwrap_or(DEFAULT_SHIP_ID),
            ship_name: string_field(value, "ship_name", "N/A"),
            current_zone: string_field(value, "current_zone", "N/A"),
            timestamp: string_field(value, "timestamp", "N/A"),
            event_type: string_field(value, "event_type", "unknown"),
            message: string_field(value, "message", ""),
            parked: value.get("parked_terminal").is_some(),
        }
    }
}

/// Extract a string field, falling back to `default` when absent or
/// mistyped, truncated to [`MAX_FIELD_LEN`] characters.
fn string_field(value: &Value, key: &str, default: &str) -> String {
    let s = value.get(key).and_then(Value::as_str).unwrap_or(default);
    truncate_chars(s, MAX_FIELD_LEN)
}

/// Truncate to at most `max` characters on a char boundary.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_owned(),
        None => s.to_owned(),
    }
}
