//! Application layer for harborwatch.
//!
//! Pure state machines and a generic runtime for the polling terminal
//! client, enabling deterministic testing with the same code that runs in
//! production.
//!
//! # Components
//!
//! - [`ShipRegistry`]: bounded in-memory table of tracked ships
//! - [`SyncEngine`]: log cursor, classifies and applies unseen entries
//! - [`InputEditor`]: idle/composing state machine for the emergency line
//! - [`App`]: combines the above, consumes [`AppEvent`], produces
//!   [`AppAction`]
//! - [`Driver`]: trait for platform-specific I/O (terminal, HTTP)
//! - [`Runtime`]: cooperative single-task orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod editor;
mod event;
mod input;
mod registry;
mod runtime;
mod sync;

pub use action::{AppAction, Echo};
pub use app::App;
pub use driver::{DispatchError, Driver, FetchError};
pub use editor::{EditorMode, InputEditor, MAX_MESSAGE_LEN};
pub use event::AppEvent;
pub use input::KeyInput;
pub use registry::{MAX_SHIPS, Ship, ShipRegistry, UpsertOutcome};
pub use runtime::{IDLE_SLEEP, INPUT_POLL_TIMEOUT, Runtime, SYNC_PERIOD};
pub use sync::{Applied, SyncEngine};
