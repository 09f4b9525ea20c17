//! Application side-effects and intents.
//!
//! [`AppAction`] values are instructions produced by the [`crate::App`]
//! state machine for the runtime to execute.

/// Character-level feedback for the composing line.
///
/// The console is plain line-oriented text, so in-progress input is echoed
/// as individual writes rather than redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    /// Show the emergency compose prompt.
    Prompt,
    /// Echo one accepted character.
    Char(char),
    /// Erase the last echoed character.
    Erase,
    /// Terminate the compose line.
    EndLine,
}

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Write one line to the operator console.
    Console(String),

    /// Echo in-progress input editing.
    Echo(Echo),

    /// Send the composed emergency message to the server.
    Dispatch {
        /// Operator-composed text. Never empty.
        message: String,
    },

    /// Quit the client.
    Quit,
}
