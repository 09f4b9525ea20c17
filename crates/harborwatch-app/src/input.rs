//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic testing without a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (submit the composed message).
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key. Treated the same as backspace while composing.
    Delete,
    /// Interrupt (Ctrl-C under raw mode). Quits the client.
    Interrupt,
}
