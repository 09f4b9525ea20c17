//! Log cursor and incremental entry application.
//!
//! The server returns the full log on every fetch. The engine remembers how
//! many entries it has already applied and classifies only the unseen
//! suffix, in append order. The cursor is monotone: a log that reports
//! fewer entries than previously observed produces no work and no error.

use harborwatch_proto::{EventKind, LogEntry};

use crate::{ShipRegistry, UpsertOutcome};

/// Record of one applied log entry, for console reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Emergency broadcast; no registry effect.
    Alert {
        /// Fleet-wide, not tied to one ship.
        global: bool,
        /// Reporting ship (sentinel when global).
        ship_id: i64,
        /// Operator text carried by the event.
        message: String,
    },
    /// Ship removed from the registry.
    Removed {
        /// Removed ship id.
        ship_id: i64,
        /// Whether the ship was actually tracked.
        known: bool,
    },
    /// Ship inserted or updated.
    Updated {
        /// Ship id.
        ship_id: i64,
        /// Display name.
        name: String,
        /// Zone recorded by the upsert.
        zone: String,
    },
    /// Upsert dropped because the registry is full.
    Rejected {
        /// Ship id that could not be inserted.
        ship_id: i64,
    },
}

/// Cursor over the remote append-only log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncEngine {
    consumed: usize,
}

impl SyncEngine {
    /// Create an engine that has consumed nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of log entries already classified and applied.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Apply all unseen entries to the registry, in append order.
    ///
    /// `entries` is the full log as currently reported by the server.
    /// Returns one [`Applied`] record per newly consumed entry; empty when
    /// the log has not grown (or has shrunk, which is defined non-error
    /// behavior that simply produces no work).
    pub fn apply(&mut self, entries: &[LogEntry], registry: &mut ShipRegistry) -> Vec<Applied> {
        let total = entries.len();
        if total <= self.consumed {
            return Vec::new();
        }

        let mut applied = Vec::with_capacity(total - self.consumed);
        for entry in &entries[self.consumed..] {
            applied.push(Self::apply_one(entry, registry));
        }

        self.consumed = total;
        applied
    }

    fn apply_one(entry: &LogEntry, registry: &mut ShipRegistry) -> Applied {
        let kind = EventKind::classify(entry);
        match kind {
            EventKind::Alert { global } => Applied::Alert {
                global,
                ship_id: entry.ship_id,
                message: entry.message.clone(),
            },
            EventKind::Removal => {
                let known = registry.remove(entry.ship_id);
                Applied::Removed { ship_id: entry.ship_id, known }
            },
            EventKind::Undocked | EventKind::Update => {
                let zone = kind.zone(entry).unwrap_or(&entry.current_zone);
                let outcome = registry.upsert(
                    entry.ship_id,
                    &entry.ship_name,
                    zone,
                    &entry.timestamp,
                    true,
                    entry.parked,
                );
                match outcome {
                    UpsertOutcome::Rejected => Applied::Rejected { ship_id: entry.ship_id },
                    UpsertOutcome::Inserted | UpsertOutcome::Updated => Applied::Updated {
                        ship_id: entry.ship_id,
                        name: entry.ship_name.clone(),
                        zone: zone.to_owned(),
                    },
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(event_type: &str, ship_id: i64, zone: &str) -> LogEntry {
        LogEntry::from_value(&json!({
            "event_type": event_type,
            "ship_id": ship_id,
            "ship_name": format!("S{ship_id}"),
            "current_zone": zone,
            "timestamp": "t",
        }))
    }

    #[test]
    fn applies_only_unseen_suffix() {
        let mut engine = SyncEngine::new();
        let mut registry = ShipRegistry::new();
        let log = vec![entry("docked", 1, "A1"), entry("docked", 2, "B1")];

        let applied = engine.apply(&log, &mut registry);
        assert_eq!(applied.len(), 2);
        assert_eq!(engine.consumed(), 2);

        // Unchanged log: no work, registry untouched.
        let before = registry.clone();
        assert!(engine.apply(&log, &mut registry).is_empty());
        assert_eq!(registry, before);
        assert_eq!(engine.consumed(), 2);
    }

    #[test]
    fn shrunken_log_is_not_an_error() {
        let mut engine = SyncEngine::new();
        let mut registry = ShipRegistry::new();
        let log = vec![entry("docked", 1, "A1"), entry("docked", 2, "B1")];
        engine.apply(&log, &mut registry);

        let shrunk = vec![entry("docked", 1, "A1")];
        assert!(engine.apply(&shrunk, &mut registry).is_empty());
        assert_eq!(engine.consumed(), 2);
    }

    #[test]
    fn undocked_overrides_zone() {
        let mut engine = SyncEngine::new();
        let mut registry = ShipRegistry::new();
        let log = vec![entry("docked", 1, "A1"), entry("undocked", 1, "A1")];
        engine.apply(&log, &mut registry);

        assert_eq!(registry.find(1).map(|s| s.zone.as_str()), Some("Undocked (Moving Away)"));
    }

    #[test]
    fn removal_then_update_recreates() {
        let mut engine = SyncEngine::new();
        let mut registry = ShipRegistry::new();
        let log = vec![
            entry("docked", 1, "A1"),
            entry("ship_deleted", 1, "A1"),
            entry("zone_change", 1, "C3"),
        ];
        let applied = engine.apply(&log, &mut registry);

        assert!(matches!(applied[1], Applied::Removed { ship_id: 1, known: true }));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find(1).map(|s| s.zone.as_str()), Some("C3"));
    }

    #[test]
    fn alert_has_no_registry_effect() {
        let mut engine = SyncEngine::new();
        let mut registry = ShipRegistry::new();
        let log = vec![LogEntry::from_value(&json!({
            "event_type": "emergency",
            "ship_id": 1,
            "message": "fire",
        }))];
        let applied = engine.apply(&log, &mut registry);

        assert_eq!(applied, vec![Applied::Alert {
            global: false,
            ship_id: 1,
            message: "fire".into()
        }]);
        assert!(registry.is_empty());
    }

    #[test]
    fn capacity_rejection_is_reported_per_entry() {
        let mut engine = SyncEngine::new();
        let mut registry = ShipRegistry::with_capacity(1);
        let log = vec![entry("docked", 1, "A1"), entry("docked", 2, "B1")];
        let applied = engine.apply(&log, &mut registry);

        assert!(matches!(applied[0], Applied::Updated { ship_id: 1, .. }));
        assert!(matches!(applied[1], Applied::Rejected { ship_id: 2 }));
        assert_eq!(engine.consumed(), 2);
        assert_eq!(registry.len(), 1);
    }
}
