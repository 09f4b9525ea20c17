//! Event type classification.

use crate::{GLOBAL_SHIP_ID, LogEntry};

/// Zone assigned to a ship that has cast off from its terminal.
const UNDOCKED_ZONE: &str = "Undocked (Moving Away)";

/// Semantic action a log entry maps to.
///
/// The tag set is closed: every tag the simulation does not explicitly
/// distinguish collapses into [`EventKind::Update`], so new server-side
/// event types degrade gracefully into position updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Emergency broadcast. Display only, no registry effect.
    Alert {
        /// Fleet-wide alert (sentinel ship id), not tied to one ship.
        global: bool,
    },
    /// Ship removed from the tracker.
    Removal,
    /// Ship cast off; zone is overridden to the undocked marker.
    Undocked,
    /// Any other event: position/status upsert with the entry's own zone.
    Update,
}

impl EventKind {
    /// Classify an entry by its event type tag.
    pub fn classify(entry: &LogEntry) -> Self {
        match entry.event_type.as_str() {
            "emergency" | "emergency_global" => {
                Self::Alert { global: entry.ship_id == GLOBAL_SHIP_ID }
            },
            "ship_deleted" => Self::Removal,
            "undocked" => Self::Undocked,
            _ => Self::Update,
        }
    }

    /// Zone the registry should record for this event, given the entry.
    ///
    /// `None` for events with no registry effect.
    pub fn zone<'a>(&self, entry: &'a LogEntry) -> Option<&'a str> {
        match self {
            Self::Undocked => Some(UNDOCKED_ZONE),
            Self::Update => Some(entry.current_zone.as_str()),
            Self::Alert { .. } | Self::Removal => None,
        }
    }
}
