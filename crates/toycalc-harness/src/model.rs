//! Reference model of the calculator.
//!
//! Written independently of the engine: typed digits are kept as text,
//! arithmetic runs in `i128` and is range-checked afterwards, and
//! repeat-equals is a single optional snapshot rather than a flag plus
//! stored registers. Model-based tests assert that the engine and this model
//! agree on every display and every error.

use toycalc_core::{EngineConfig, EngineError, Operation, OverflowPolicy};

use crate::press::Press;

/// Reference calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCalculator {
    config: EngineConfig,
    /// Significant digits typed so far; empty means zero
    typed: String,
    result: i64,
    pending: Option<Operation>,
    /// Operation and operand of the last equals, present until the next
    /// digit or operator
    replay: Option<(Option<Operation>, i64)>,
    showing_result: bool,
}

impl Default for ModelCalculator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ModelCalculator {
    /// Create a model with the given configuration.
    ///
    /// The configuration is assumed valid.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            typed: String::new(),
            result: 0,
            pending: None,
            replay: None,
            showing_result: false,
        }
    }

    /// Apply a press, mirroring the engine's contract.
    pub fn press(&mut self, press: Press) -> Result<(), EngineError> {
        match press {
            Press::Digit(digit) => self.digit(digit),
            Press::Operation(operation) => self.operation(operation),
            Press::Equals => self.equals(),
        }
    }

    /// What the display shows.
    pub fn display(&self) -> String {
        if self.showing_result {
            self.result.to_string()
        } else {
            self.input().to_string()
        }
    }

    fn input(&self) -> i64 {
        self.typed.parse().unwrap_or(0)
    }

    fn digit(&mut self, digit: u8) -> Result<(), EngineError> {
        if digit > 9 {
            return Err(EngineError::InvalidDigit { digit });
        }
        if self.replay.is_some() {
            *self = Self::new(self.config);
        }

        self.showing_result = false;
        let max = self.config.max_digits as usize;
        if (digit != 0 || !self.typed.is_empty()) && self.typed.len() < max {
            self.typed.push(char::from(b'0' + digit));
        }
        Ok(())
    }

    fn operation(&mut self, operation: Operation) -> Result<(), EngineError> {
        if self.replay.take().is_none() {
            self.result = self.combine(self.pending, self.input())?;
            self.typed.clear();
        }
        self.pending = Some(operation);
        self.showing_result = true;
        Ok(())
    }

    fn equals(&mut self) -> Result<(), EngineError> {
        let (operation, operand) = self.replay.unwrap_or((self.pending, self.input()));
        self.result = self.combine(operation, operand)?;
        self.replay = Some((operation, operand));
        self.pending = None;
        self.typed.clear();
        self.showing_result = true;
        Ok(())
    }

    fn combine(&self, operation: Option<Operation>, operand: i64) -> Result<i64, EngineError> {
        let Some(operation) = operation else {
            return Ok(operand);
        };

        let (lhs, rhs) = (i128::from(self.result), i128::from(operand));
        let wide = match operation {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide if rhs == 0 => return Err(EngineError::DivisionByZero),
            Operation::Divide => lhs / rhs,
        };

        match (i64::try_from(wide), self.config.overflow) {
            (Ok(value), _) => Ok(value),
            (Err(_), OverflowPolicy::Checked) => Err(EngineError::ArithmeticOverflow { operation }),
            (Err(_), OverflowPolicy::Wrapping) => Ok(wide as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(model: &mut ModelCalculator, presses: &[Press]) -> Vec<String> {
        presses
            .iter()
            .map(|&p| {
                model.press(p).unwrap();
                model.display()
            })
            .collect()
    }

    #[test]
    fn model_walkthrough() {
        let mut model = ModelCalculator::default();
        let shown = run(&mut model, &[
            Press::Digit(5),
            Press::Operation(Operation::Add),
            Press::Digit(6),
            Press::Operation(Operation::Subtract),
            Press::Digit(3),
            Press::Equals,
            Press::Operation(Operation::Multiply),
            Press::Digit(3),
            Press::Operation(Operation::Divide),
            Press::Digit(2),
            Press::Equals,
            Press::Equals,
            Press::Equals,
        ]);
        assert_eq!(shown, ["5", "5", "6", "11", "3", "8", "8", "3", "24", "2", "12", "6", "3"]);
    }

    #[test]
    fn model_digit_cap_and_leading_zeros() {
        let mut model = ModelCalculator::default();
        for d in [0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9] {
            model.press(Press::Digit(d)).unwrap();
        }
        assert_eq!(model.display(), "12345678");
    }

    #[test]
    fn model_rejects_without_change() {
        let mut model = ModelCalculator::default();
        run(&mut model, &[Press::Digit(1), Press::Operation(Operation::Divide)]);
        let before = model.clone();

        assert_eq!(model.press(Press::Equals), Err(EngineError::DivisionByZero));
        assert_eq!(model, before);
        assert_eq!(model.press(Press::Digit(10)), Err(EngineError::InvalidDigit { digit: 10 }));
        assert_eq!(model, before);
    }
}
