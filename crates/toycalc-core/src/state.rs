//! Observable calculator state.

use crate::operation::Operation;

/// Which of the two registers the display shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveField {
    /// The number being typed
    #[default]
    Input,
    /// The running result
    Accumulator,
}

/// Calculator registers and flags.
///
/// Owned by [`crate::CalculatorEngine`] and only changed by its press
/// methods. Front-ends get read access through
/// [`crate::CalculatorEngine::state`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculatorState {
    /// Running result of completed operations
    pub accumulator: i64,
    /// Number being typed, never negative
    pub input: i64,
    /// Snapshot of `input` taken on equals, replayed on repeated equals
    pub stored_operand: i64,
    /// Operation waiting to be applied
    pub current_operation: Option<Operation>,
    /// Operation replayed on repeated equals
    pub stored_operation: Option<Operation>,
    /// Register shown on the display
    pub active_field: ActiveField,
    /// Set by equals, cleared by the next digit or operator
    pub equals_just_pressed: bool,
}

impl CalculatorState {
    /// Value currently on the display.
    pub fn display_value(&self) -> i64 {
        match self.active_field {
            ActiveField::Input => self.input,
            ActiveField::Accumulator => self.accumulator,
        }
    }
}
