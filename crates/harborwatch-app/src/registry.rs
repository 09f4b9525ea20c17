//! Bounded in-memory registry of tracked ships.
//!
//! The registry is a fixed-capacity table keyed by ship id. Ships are
//! created on first reference by any log entry naming them and destroyed
//! only by an explicit removal event, never by inactivity. Insertion beyond
//! capacity is rejected and reported, leaving the existing set unchanged.

use harborwatch_proto::MAX_FIELD_LEN;

/// Default registry capacity.
pub const MAX_SHIPS: usize = 64;

/// One tracked ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    /// Ship identifier. Identity key; never duplicated in the registry.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Last reported zone.
    pub zone: String,
    /// Timestamp of the last event that touched this ship.
    pub last_event_time: String,
    /// Whether the ship is considered active.
    pub active: bool,
    /// Whether the last event placed the ship at a terminal.
    pub parked: bool,
}

/// Result of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// Existing ship updated in place.
    Updated,
    /// New ship appended under capacity.
    Inserted,
    /// Registry at capacity; the upsert was dropped.
    Rejected,
}

/// Bounded table of tracked ships.
///
/// Size never exceeds capacity. All string fields are truncated to
/// [`MAX_FIELD_LEN`] characters on the way in, silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipRegistry {
    ships: Vec<Ship>,
    capacity: usize,
}

impl Default for ShipRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipRegistry {
    /// Create an empty registry with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_SHIPS)
    }

    /// Create an empty registry with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { ships: Vec::new(), capacity }
    }

    /// Look up a ship by id.
    pub fn find(&self, id: i64) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id == id)
    }

    /// Insert or update a ship.
    ///
    /// Overwrites the mutable fields in place when the id is already
    /// tracked; otherwise appends a new ship if under capacity. At capacity
    /// the upsert is rejected and the registry left unchanged.
    pub fn upsert(
        &mut self,
        id: i64,
        name: &str,
        zone: &str,
        timestamp: &str,
        active: bool,
        parked: bool,
    ) -> UpsertOutcome {
        if let Some(ship) = self.ships.iter_mut().find(|s| s.id == id) {
            ship.name = bounded(name);
            ship.zone = bounded(zone);
            ship.last_event_time = bounded(timestamp);
            ship.active = active;
            ship.parked = parked;
            return UpsertOutcome::Updated;
        }

        if self.ships.len() >= self.capacity {
            tracing::warn!(ship_id = id, capacity = self.capacity, "registry full, upsert dropped");
            return UpsertOutcome::Rejected;
        }

        self.ships.push(Ship {
            id,
            name: bounded(name),
            zone: bounded(zone),
            last_event_time: bounded(timestamp),
            active,
            parked,
        });
        UpsertOutcome::Inserted
    }

    /// Remove a ship by id. Returns `false` (not an error) when absent.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.ships.len();
        self.ships.retain(|s| s.id != id);
        self.ships.len() != before
    }

    /// Tracked ships in insertion order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of tracked ships.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Whether no ships are tracked.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Maximum number of ships this registry will hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Truncate a server-supplied string to the field bound.
fn bounded(s: &str) -> String {
    match s.char_indices().nth(MAX_FIELD_LEN) {
        Some((idx, _)) => s[..idx].to_owned(),
        None => s.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_inserts_then_updates_in_place() {
        let mut reg = ShipRegistry::new();
        assert_eq!(reg.upsert(1, "Alpha", "A1", "t1", true, false), UpsertOutcome::Inserted);
        assert_eq!(reg.upsert(1, "Alpha", "B2", "t2", true, true), UpsertOutcome::Updated);

        assert_eq!(reg.len(), 1);
        let ship = reg.find(1).map(Clone::clone);
        assert_eq!(ship.map(|s| (s.zone, s.parked)), Some(("B2".to_owned(), true)));
    }

    #[test]
    fn remove_then_upsert_recreates() {
        let mut reg = ShipRegistry::new();
        reg.upsert(1, "Alpha", "A1", "t1", true, false);
        assert!(reg.remove(1));
        assert!(reg.find(1).is_none());

        reg.upsert(1, "Alpha", "A2", "t2", true, false);
        assert_eq!(reg.find(1).map(|s| s.zone.as_str()), Some("A2"));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut reg = ShipRegistry::new();
        assert!(!reg.remove(99));
    }

    #[test]
    fn capacity_rejection_leaves_registry_unchanged() {
        let mut reg = ShipRegistry::with_capacity(3);
        for id in 0..3 {
            assert_eq!(reg.upsert(id, "S", "Z", "t", true, false), UpsertOutcome::Inserted);
        }

        assert_eq!(reg.upsert(3, "Late", "Z", "t", true, false), UpsertOutcome::Rejected);
        assert_eq!(reg.len(), 3);
        assert!(reg.find(3).is_none());

        // Updates to existing ships still land at capacity.
        assert_eq!(reg.upsert(0, "S", "Z9", "t9", true, false), UpsertOutcome::Updated);
        assert_eq!(reg.find(0).map(|s| s.zone.as_str()), Some("Z9"));
    }

    #[test]
    fn string_fields_are_bounded() {
        let mut reg = ShipRegistry::new();
        let long = "n".repeat(500);
        reg.upsert(1, &long, &long, &long, true, false);

        let ship = reg.find(1).map(Clone::clone);
        let lens = ship.map(|s| {
            (s.name.chars().count(), s.zone.chars().count(), s.last_event_time.chars().count())
        });
        assert_eq!(lens, Some((MAX_FIELD_LEN, MAX_FIELD_LEN, MAX_FIELD_LEN)));
    }
}
