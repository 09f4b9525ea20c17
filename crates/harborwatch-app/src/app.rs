//! Application state machine.
//!
//! [`App`] owns the registry, the log cursor, and the line editor, and is
//! the single place their state is mutated. It is a pure state machine: it
//! consumes [`AppEvent`] inputs and produces [`AppAction`] instructions for
//! the runtime to execute. No I/O dependencies.

use harborwatch_proto::LogEntry;

use crate::{AppAction, AppEvent, Applied, InputEditor, KeyInput, ShipRegistry, SyncEngine};

/// Application state machine.
#[derive(Debug, Clone, Default)]
pub struct App {
    registry: ShipRegistry,
    sync: SyncEngine,
    editor: InputEditor,
}

impl App {
    /// Create an App with the default registry capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an App with an explicit registry capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: ShipRegistry::with_capacity(capacity),
            sync: SyncEngine::new(),
            editor: InputEditor::new(),
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(KeyInput::Interrupt) => vec![AppAction::Quit],
            AppEvent::Key(key) => self.editor.handle_key(key),
            AppEvent::LogFetched { entries } => self.apply_log(&entries),
        }
    }

    /// Apply the unseen log suffix and render the result as console lines.
    fn apply_log(&mut self, entries: &[LogEntry]) -> Vec<AppAction> {
        let applied = self.sync.apply(entries, &mut self.registry);
        if applied.is_empty() {
            return vec![];
        }

        let mut out = Vec::with_capacity(applied.len() + self.registry.len() + 4);
        out.push(AppAction::Console(format!(
            "--- {} new log entries ({} total) ---",
            applied.len(),
            self.sync.consumed()
        )));
        for record in &applied {
            out.push(AppAction::Console(Self::event_line(record)));
        }
        out.extend(self.snapshot());
        out
    }

    fn event_line(record: &Applied) -> String {
        match record {
            Applied::Alert { global: true, message, .. } => {
                format!("!!! EMERGENCY (ALL SHIPS): {message}")
            },
            Applied::Alert { global: false, ship_id, message } => {
                format!("!!! EMERGENCY (ship {ship_id}): {message}")
            },
            Applied::Removed { ship_id, known: true } => {
                format!("Ship {ship_id} removed from tracking")
            },
            Applied::Removed { ship_id, known: false } => {
                format!("Ship {ship_id} removal ignored (not tracked)")
            },
            Applied::Updated { ship_id, name, zone } => {
                format!("Ship {name} (id {ship_id}) -> {zone}")
            },
            Applied::Rejected { ship_id } => {
                format!("Registry full: ship {ship_id} not tracked")
            },
        }
    }

    /// Human-readable snapshot of the full registry.
    pub fn snapshot(&self) -> Vec<AppAction> {
        let mut out = Vec::with_capacity(self.registry.len() + 1);
        out.push(AppAction::Console(format!(
            "--- Tracked ships ({}/{}) ---",
            self.registry.len(),
            self.registry.capacity()
        )));
        if self.registry.is_empty() {
            out.push(AppAction::Console("  (no ships tracked)".to_owned()));
            return out;
        }
        for ship in self.registry.ships() {
            let docked = if ship.parked { "  [docked]" } else { "" };
            out.push(AppAction::Console(format!(
                "  [{}] {} | zone: {} | last: {}{docked}",
                ship.id, ship.name, ship.zone, ship.last_event_time
            )));
        }
        out
    }

    /// Tracked ships.
    pub fn registry(&self) -> &ShipRegistry {
        &self.registry
    }

    /// Count of log entries already applied.
    pub fn cursor(&self) -> usize {
        self.sync.consumed()
    }

    /// Line editor state.
    pub fn editor(&self) -> &InputEditor {
        &self.editor
    }
}
