//! Application events
//!
//! Input delivered by a [`crate::Driver`] to the [`crate::App`].

use crate::keypad::Key;

/// Events consumed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A single key press.
    Key(Key),

    /// A key script, e.g. one line typed at a prompt.
    Text(String),
}
