//! Error types for the calculator engine.

use thiserror::Error;

use crate::operation::Operation;

/// Errors returned by a button press.
///
/// A press that fails leaves the calculator state untouched and does not
/// notify display listeners.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Digit outside `0..=9` passed to a digit press
    #[error("invalid digit {digit}, expected 0-9")]
    InvalidDigit {
        /// The rejected value
        digit: u8,
    },

    /// Symbol that does not name an operation
    #[error("unrecognized operation {symbol:?}")]
    InvalidOperation {
        /// The rejected symbol
        symbol: String,
    },

    /// Divide applied with a zero input
    #[error("division by zero")]
    DivisionByZero,

    /// Result does not fit in a 64-bit signed integer
    #[error("arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that overflowed
        operation: Operation,
    },
}

/// Errors from validating an [`crate::EngineConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Digit limit outside the range an `i64` input can hold
    #[error("max_digits must be between 1 and {max}, got {max_digits}")]
    MaxDigitsOutOfRange {
        /// The rejected limit
        max_digits: u32,
        /// Largest accepted limit
        max: u32,
    },
}
