//! Interactive line editor for the emergency message.
//!
//! A two-state machine fed one key at a time from non-blocking reads. It
//! never waits for a full line: each tick routes at most one available key
//! through [`InputEditor::handle_key`].

use crate::{AppAction, Echo, KeyInput};

/// Maximum emergency message length in characters.
///
/// Input beyond the bound is dropped silently.
pub const MAX_MESSAGE_LEN: usize = 255;

/// Editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Waiting for the compose hotkey (`e`).
    #[default]
    Idle,
    /// Accumulating an emergency message.
    Composing,
}

/// Line editor state machine.
///
/// Composing is entered with `e`/`E` and left only through Enter: a
/// non-empty buffer is handed off to dispatch, an empty one simply returns
/// to idle. Submitting empty is the one way to abandon a message; there is
/// deliberately no cancel key.
#[derive(Debug, Clone, Default)]
pub struct InputEditor {
    buffer: String,
    mode: EditorMode,
}

impl InputEditor {
    /// Create an idle editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Text composed so far. Empty while idle.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Feed one key through the state machine.
    pub fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match self.mode {
            EditorMode::Idle => self.handle_idle(key),
            EditorMode::Composing => self.handle_composing(key),
        }
    }

    fn handle_idle(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char('e' | 'E') => {
                self.buffer.clear();
                self.mode = EditorMode::Composing;
                vec![AppAction::Echo(Echo::Prompt)]
            },
            _ => vec![],
        }
    }

    fn handle_composing(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Enter => {
                let text = std::mem::take(&mut self.buffer);
                self.mode = EditorMode::Idle;
                if text.is_empty() {
                    vec![AppAction::Echo(Echo::EndLine)]
                } else {
                    vec![AppAction::Echo(Echo::EndLine), AppAction::Dispatch { message: text }]
                }
            },
            KeyInput::Backspace | KeyInput::Delete => {
                if self.buffer.pop().is_some() {
                    vec![AppAction::Echo(Echo::Erase)]
                } else {
                    vec![]
                }
            },
            KeyInput::Char(c) if !c.is_control() => {
                if self.buffer.chars().count() < MAX_MESSAGE_LEN {
                    self.buffer.push(c);
                    vec![AppAction::Echo(Echo::Char(c))]
                } else {
                    vec![]
                }
            },
            _ => vec![],
        }
    }
}
