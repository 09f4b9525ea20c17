//! Production driver: raw-mode terminal plus HTTP.
//!
//! Implements the [`Driver`] trait using crossterm for keyboard events and
//! [`LogService`] for the wire. Raw mode is acquired through a guard so the
//! terminal is restored on every exit path, including panics and
//! interrupts.

use std::{
    io::{self, Stdout, Write, stdout},
    time::Instant,
};

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use harborwatch_app::{
    DispatchError, Driver, Echo, FetchError, IDLE_SLEEP, INPUT_POLL_TIMEOUT, KeyInput,
};
use harborwatch_proto::{EmergencyReport, LogReply};
use thiserror::Error;

use crate::LogService;

/// Fatal terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Scoped raw-mode acquisition. Restores cooked mode on drop.
#[derive(Debug)]
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns the raw-mode guard, the crossterm event stream, and the HTTP
/// client. The console is plain line-oriented text on stdout; logging goes
/// to stderr so the two never mix.
pub struct PortDriver {
    _raw: RawModeGuard,
    stdout: Stdout,
    events: EventStream,
    service: LogService,
}

impl PortDriver {
    /// Enter raw mode and build the driver around an HTTP client.
    pub fn new(service: LogService) -> Result<Self, TerminalError> {
        let raw = RawModeGuard::acquire()?;
        Ok(Self { _raw: raw, stdout: stdout(), events: EventStream::new(), service })
    }

    /// Convert a crossterm key event to [`KeyInput`].
    ///
    /// Under raw mode Ctrl-C arrives as a key event rather than a signal;
    /// it maps to [`KeyInput::Interrupt`] so the loop can exit and the
    /// guard restore the terminal.
    fn convert_key(event: &KeyEvent) -> Option<KeyInput> {
        if event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(event.code, KeyCode::Char('c'))
        {
            return Some(KeyInput::Interrupt);
        }
        match event.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            _ => None,
        }
    }
}

impl Driver for PortDriver {
    type Error = TerminalError;
    type Instant = Instant;

    async fn fetch_log(&mut self) -> Result<LogReply, FetchError> {
        self.service.fetch_log().await
    }

    async fn dispatch(&mut self, report: EmergencyReport) -> Result<String, DispatchError> {
        self.service.dispatch(&report).await
    }

    async fn poll_key(&mut self) -> Result<Option<KeyInput>, Self::Error> {
        match tokio::time::timeout(INPUT_POLL_TIMEOUT, self.events.next()).await {
            // No input ready within the bound.
            Err(_) => Ok(None),
            Ok(Some(Ok(Event::Key(key)))) if key.kind == KeyEventKind::Press => {
                Ok(Self::convert_key(&key))
            },
            Ok(Some(Ok(_))) | Ok(None) => Ok(None),
            Ok(Some(Err(e))) => Err(TerminalError::Io(e)),
        }
    }

    async fn idle(&mut self) {
        tokio::time::sleep(IDLE_SLEEP).await;
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn console_line(&mut self, line: &str) -> Result<(), Self::Error> {
        // Raw mode disables output post-processing; emit explicit CRLF.
        write!(self.stdout, "{line}\r\n")?;
        self.stdout.flush()?;
        Ok(())
    }

    fn echo(&mut self, echo: Echo) -> Result<(), Self::Error> {
        match echo {
            Echo::Prompt => write!(self.stdout, "\r\nEMERGENCY> ")?,
            Echo::Char(c) => write!(self.stdout, "{c}")?,
            Echo::Erase => write!(self.stdout, "\u{8} \u{8}")?,
            Echo::EndLine => write!(self.stdout, "\r\n")?,
        }
        self.stdout.flush()?;
        Ok(())
    }
}
