//! Terminal client for the port log service.
//!
//! A thin shell over [`harborwatch_app::Runtime`] that provides the
//! production I/O: crossterm raw-mode keyboard input and reqwest HTTP.
//! All orchestration logic lives in the generic runtime; this crate only
//! handles the terminal and the wire.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod http;
pub mod terminal;

pub use http::LogService;
pub use terminal::{PortDriver, TerminalError};
