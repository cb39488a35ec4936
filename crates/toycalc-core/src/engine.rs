//! Calculator state machine.
//!
//! # State Machine
//!
//! The interesting state is the `(active_field, equals_just_pressed)` pair,
//! layered over the registers and pending operations:
//!
//! ```text
//!              digit                       operator
//!   ┌──────────────────────┐    ┌──────────────────────────┐
//!   │                      ▼    │                          ▼
//! ┌─┴──────────────┐     ┌──────┴─────────┐     ┌────────────────────┐
//! │ Input          │────>│ Accumulator    │<───>│ Accumulator        │
//! │ (typing)       │ op  │ (op pending)   │  =  │ (equals pressed)   │
//! └────────────────┘     └────────────────┘     └─────────┬──────────┘
//!         ▲                                               │
//!         └───────────────── digit (reset) ───────────────┘
//! ```
//!
//! There is no terminal state; the calculator runs indefinitely.
//!
//! # Repeat-equals
//!
//! Equals snapshots the input and the operation it just applied. Pressing
//! equals again replays that snapshot, so `2 × 3 = = =` shows 6, 18, 54.

use std::fmt;

use tracing::{debug, trace};

use crate::{
    config::{EngineConfig, OverflowPolicy},
    error::{ConfigError, EngineError},
    listeners::{DisplayListeners, ListenerId},
    operation::Operation,
    state::{ActiveField, CalculatorState},
};

/// Four-function pocket calculator.
///
/// Not designed for concurrent access: route every press through one
/// thread (typically a UI event loop).
#[derive(Debug)]
pub struct CalculatorEngine {
    state: CalculatorState,
    config: EngineConfig,
    /// Input value at which digit entry stops, `10^(max_digits - 1)`
    digit_cap: i64,
    listeners: DisplayListeners,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Create a calculator with the default configuration (8 digits,
    /// checked overflow).
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            state: CalculatorState::default(),
            config,
            digit_cap: 10_i64.pow(config.max_digits - 1),
            listeners: DisplayListeners::new(),
        }
    }

    /// Create a calculator with a custom configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        let digit_cap = config.validate()?;
        Ok(Self {
            state: CalculatorState::default(),
            config,
            digit_cap,
            listeners: DisplayListeners::new(),
        })
    }

    /// Current state
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Press a digit button.
    ///
    /// Starts a fresh computation if the previous press was equals. Presses
    /// beyond the digit limit are ignored but still notify listeners.
    ///
    /// # Errors
    /// Returns `InvalidDigit` if `digit > 9`
    pub fn press_digit(&mut self, digit: u8) -> Result<(), EngineError> {
        if digit > 9 {
            debug!(digit, "rejected digit press");
            return Err(EngineError::InvalidDigit { digit });
        }

        if self.state.equals_just_pressed {
            trace!("digit after equals, starting fresh computation");
            self.reset();
        }

        self.state.active_field = ActiveField::Input;

        let digit = i64::from(digit);
        if self.state.input == 0 {
            self.state.input = digit;
        } else if self.state.input < self.digit_cap {
            self.state.input = self.state.input * 10 + digit;
        } else {
            trace!(input = self.state.input, "digit limit reached, press ignored");
        }

        self.update_display();
        Ok(())
    }

    /// Press an operator button.
    ///
    /// Applies the pending operation first, so `5 + 6 -` shows 11. Right
    /// after equals the previous result is reused as is.
    ///
    /// # Errors
    /// Returns `DivisionByZero` or `ArithmeticOverflow` if applying the
    /// pending operation fails. The state is left unchanged.
    pub fn press_operation(&mut self, operation: Operation) -> Result<(), EngineError> {
        if !self.state.equals_just_pressed {
            let accumulator = self.perform(self.state.current_operation, self.state.input)?;
            self.state.accumulator = accumulator;
            self.state.input = 0;
        }

        self.state.active_field = ActiveField::Accumulator;
        self.state.current_operation = Some(operation);
        self.state.equals_just_pressed = false;

        trace!(%operation, accumulator = self.state.accumulator, "operation pressed");
        self.update_display();
        Ok(())
    }

    /// Press the equals button.
    ///
    /// Pressing equals again replays the last operation with the last
    /// operand.
    ///
    /// # Errors
    /// Returns `DivisionByZero` or `ArithmeticOverflow` if the operation
    /// fails. The state is left unchanged.
    pub fn press_equals(&mut self) -> Result<(), EngineError> {
        let (operation, operand) = if self.state.equals_just_pressed {
            (self.state.stored_operation, self.state.stored_operand)
        } else {
            (self.state.current_operation, self.state.input)
        };

        let accumulator = self.perform(operation, operand)?;

        self.state.accumulator = accumulator;
        self.state.stored_operation = operation;
        self.state.current_operation = None;
        self.state.stored_operand = operand;
        self.state.equals_just_pressed = true;
        self.state.active_field = ActiveField::Accumulator;
        self.state.input = 0;

        trace!(accumulator, ?operation, operand, "equals pressed");
        self.update_display();
        Ok(())
    }

    /// Text currently on the display.
    pub fn display(&self) -> String {
        self.state.display_value().to_string()
    }

    /// Register a listener called with the display after every successful
    /// press, in registration order.
    pub fn add_display_listener(&mut self, listener: impl FnMut(&str) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_display_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered display listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Combine the accumulator with `operand` under `operation`.
    ///
    /// With no pending operation the operand simply becomes the new
    /// accumulator.
    fn perform(&self, operation: Option<Operation>, operand: i64) -> Result<i64, EngineError> {
        let Some(operation) = operation else {
            return Ok(operand);
        };

        operation.apply(self.state.accumulator, operand, self.overflow_policy()).inspect_err(
            |err| {
                debug!(
                    %operation,
                    accumulator = self.state.accumulator,
                    operand,
                    error = %err,
                    "operation rejected"
                );
            },
        )
    }

    fn overflow_policy(&self) -> OverflowPolicy {
        self.config.overflow
    }

    fn reset(&mut self) {
        self.state = CalculatorState::default();
    }

    fn update_display(&mut self) {
        let display = self.display();
        self.listeners.notify(&display);
    }
}

impl fmt::Display for CalculatorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Calculator [current display: {}]", self.state.display_value())
    }
}
