//! Integration tests for the App state machine.
//!
//! Drives full ticks through [`App::handle`] with JSON fixtures shaped like
//! the real log service and checks registry state, cursor, and the actions
//! handed to the runtime.

#![allow(clippy::unwrap_used)]

use harborwatch_app::{App, AppAction, AppEvent, KeyInput};
use harborwatch_proto::{LogEntry, LogReply};
use serde_json::{Value, json};

fn entries(values: &[Value]) -> Vec<LogEntry> {
    values.iter().map(LogEntry::from_value).collect()
}

fn fetch(app: &mut App, values: &[Value]) -> Vec<AppAction> {
    app.handle(AppEvent::LogFetched { entries: entries(values) })
}

fn console_lines(actions: &[AppAction]) -> Vec<&str> {
    actions
        .iter()
        .filter_map(|a| match a {
            AppAction::Console(line) => Some(line.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn first_tick_applies_both_entries() {
    let mut app = App::new();
    let log = [
        json!({
            "event_type": "docked",
            "ship_id": 1,
            "ship_name": "Alpha",
            "current_zone": "A1",
            "timestamp": "t1",
        }),
        json!({ "event_type": "emergency", "ship_id": 1, "message": "fire" }),
    ];

    let actions = fetch(&mut app, &log);

    assert_eq!(app.cursor(), 2);
    assert_eq!(app.registry().len(), 1);
    let ship = app.registry().find(1).unwrap();
    assert_eq!(ship.name, "Alpha");
    assert_eq!(ship.zone, "A1");
    assert!(ship.active);

    let lines = console_lines(&actions);
    assert!(lines.iter().any(|l| l.contains("EMERGENCY (ship 1): fire")));

    // Same log again: total unchanged, no new work, no output.
    let repeat = fetch(&mut app, &log);
    assert!(repeat.is_empty());
    assert_eq!(app.cursor(), 2);
    assert_eq!(app.registry().len(), 1);
}

#[test]
fn deletion_event_empties_registry() {
    let mut app = App::new();
    let mut log = vec![
        json!({
            "event_type": "docked",
            "ship_id": 1,
            "ship_name": "Alpha",
            "current_zone": "A1",
            "timestamp": "t1",
        }),
        json!({ "event_type": "emergency", "ship_id": 1, "message": "fire" }),
    ];
    fetch(&mut app, &log);

    log.push(json!({ "event_type": "ship_deleted", "ship_id": 1 }));
    fetch(&mut app, &log);

    assert!(app.registry().is_empty());
    assert_eq!(app.cursor(), 3);
}

#[test]
fn global_alert_displays_without_registry_effect() {
    let mut app = App::new();
    let actions = fetch(&mut app, &[json!({
        "event_type": "emergency_global",
        "ship_id": 0,
        "message": "storm warning",
    })]);

    let lines = console_lines(&actions);
    assert!(lines.iter().any(|l| l.contains("EMERGENCY (ALL SHIPS): storm warning")));
    assert!(app.registry().is_empty());
    assert_eq!(app.cursor(), 1);
}

#[test]
fn malformed_entry_defaults_and_does_not_halt_the_batch() {
    let mut app = App::new();
    let actions = fetch(&mut app, &[
        json!("garbage"),
        json!({ "event_type": "docked", "ship_id": 2, "ship_name": "Beta", "current_zone": "B1" }),
    ]);

    assert_eq!(app.cursor(), 2);
    // Garbage entry became a generic update for the default id.
    assert!(app.registry().find(-1).is_some());
    assert_eq!(app.registry().find(-1).map(|s| s.name.as_str()), Some("N/A"));
    assert!(app.registry().find(2).is_some());
    assert!(!console_lines(&actions).is_empty());
}

#[test]
fn snapshot_follows_every_batch_with_new_entries() {
    let mut app = App::new();
    let actions = fetch(&mut app, &[json!({
        "event_type": "docked",
        "ship_id": 1,
        "ship_name": "Alpha",
        "current_zone": "A1",
        "parked_terminal": 4,
    })]);

    let lines = console_lines(&actions);
    assert!(lines[0].contains("1 new log entries (1 total)"));
    assert!(lines.iter().any(|l| l.contains("Tracked ships (1/")));
    assert!(lines.iter().any(|l| l.contains("[docked]")));
}

#[test]
fn full_reply_roundtrip_through_wire_shape() {
    let body = json!({
        "status": "success",
        "logs": [
            { "event_type": "docked", "ship_id": 9, "ship_name": "Iris", "current_zone": "C2" },
        ],
    })
    .to_string();
    let reply = LogReply::from_json(&body).unwrap();

    let mut app = App::new();
    app.handle(AppEvent::LogFetched { entries: reply.entries });
    assert_eq!(app.registry().find(9).map(|s| s.name.as_str()), Some("Iris"));
}

#[test]
fn interrupt_quits_regardless_of_editor_state() {
    let mut app = App::new();
    assert_eq!(app.handle(AppEvent::Key(KeyInput::Interrupt)), vec![AppAction::Quit]);

    app.handle(AppEvent::Key(KeyInput::Char('e')));
    assert_eq!(app.handle(AppEvent::Key(KeyInput::Interrupt)), vec![AppAction::Quit]);
}

#[test]
fn composing_help_dispatches_exactly_once() {
    let mut app = App::new();
    app.handle(AppEvent::Key(KeyInput::Char('e')));
    for c in "help".chars() {
        app.handle(AppEvent::Key(KeyInput::Char(c)));
    }

    let actions = app.handle(AppEvent::Key(KeyInput::Enter));
    let dispatched: Vec<_> = actions
        .iter()
        .filter(|a| matches!(a, AppAction::Dispatch { message } if message == "help"))
        .collect();
    assert_eq!(dispatched.len(), 1);
}

#[test]
fn sync_and_input_do_not_disturb_each_other() {
    let mut app = App::new();

    // Start composing, then a sync tick lands mid-compose.
    app.handle(AppEvent::Key(KeyInput::Char('e')));
    for c in "sos".chars() {
        app.handle(AppEvent::Key(KeyInput::Char(c)));
    }
    fetch(&mut app, &[json!({ "event_type": "docked", "ship_id": 5, "ship_name": "Echo" })]);

    // The buffer survives the tick and still submits intact.
    assert_eq!(app.editor().buffer(), "sos");
    let actions = app.handle(AppEvent::Key(KeyInput::Enter));
    assert!(
        actions.iter().any(|a| matches!(a, AppAction::Dispatch { message } if message == "sos"))
    );
}
