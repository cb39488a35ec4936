//! Engine configuration.

use crate::error::ConfigError;

/// Default number of digits the input field accepts.
pub const MAX_DIGITS: u32 = 8;

/// Largest digit limit whose every value fits in an `i64` input.
const MAX_SUPPORTED_DIGITS: u32 = 18;

/// What the engine does when a result leaves the `i64` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Reject the press with [`crate::EngineError::ArithmeticOverflow`]
    #[default]
    Checked,
    /// Wrap around in two's complement
    Wrapping,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of digits the input field accepts before ignoring presses
    pub max_digits: u32,
    /// Overflow handling for add, subtract, multiply and divide
    pub overflow: OverflowPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_digits: MAX_DIGITS, overflow: OverflowPolicy::default() }
    }
}

impl EngineConfig {
    /// Check the configuration and return the digit-entry cap.
    ///
    /// The cap is `10^(max_digits - 1)`: once the input reaches it, further
    /// digit presses are ignored.
    pub fn validate(&self) -> Result<i64, ConfigError> {
        if !(1..=MAX_SUPPORTED_DIGITS).contains(&self.max_digits) {
            return Err(ConfigError::MaxDigitsOutOfRange {
                max_digits: self.max_digits,
                max: MAX_SUPPORTED_DIGITS,
            });
        }
        Ok(10_i64.pow(self.max_digits - 1))
    }
}
