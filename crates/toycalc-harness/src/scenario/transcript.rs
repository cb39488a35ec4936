//! Record of a scenario run.

use toycalc_app::Key;
use toycalc_core::{CalculatorState, EngineError};

/// A key press the engine refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPress {
    /// Position of the key in the script, counting keys not bytes
    pub index: usize,
    /// The key pressed
    pub key: Key,
    /// Why it was refused
    pub error: EngineError,
}

/// Everything observable about a finished scenario.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Scenario name
    pub name: String,
    /// Display strings delivered to listeners, in order
    pub updates: Vec<String>,
    /// Presses that returned an error
    pub rejected: Vec<RejectedPress>,
    /// Display after the last key
    pub final_display: String,
    /// Engine state after the last key
    pub final_state: CalculatorState,
    /// Whether the script ended with a quit key before its last key
    pub quit_early: bool,
}

impl Transcript {
    /// Whether every press succeeded.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Display updates joined one per line, handy for snapshots.
    pub fn updates_text(&self) -> String {
        self.updates.join("\n")
    }
}
