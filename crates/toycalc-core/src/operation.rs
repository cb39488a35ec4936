//! The four arithmetic operations of the calculator.

use std::{fmt, str::FromStr};

use crate::{config::OverflowPolicy, error::EngineError};

/// An operator button.
///
/// The "no pending operation" state is modelled as `Option::<Operation>::None`
/// by the engine rather than as a variant here, so every value of this type
/// is something the user can actually press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`, integer division truncating toward zero
    Divide,
}

impl Operation {
    /// All operations, in keypad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// ASCII symbol printed on the button.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operation to `lhs` and `rhs`.
    ///
    /// Division by zero is always an error. Results outside the `i64` range
    /// are reported or wrapped according to `policy`.
    pub fn apply(self, lhs: i64, rhs: i64, policy: OverflowPolicy) -> Result<i64, EngineError> {
        if self == Self::Divide && rhs == 0 {
            return Err(EngineError::DivisionByZero);
        }

        match policy {
            OverflowPolicy::Checked => {
                let result = match self {
                    Self::Add => lhs.checked_add(rhs),
                    Self::Subtract => lhs.checked_sub(rhs),
                    Self::Multiply => lhs.checked_mul(rhs),
                    Self::Divide => lhs.checked_div(rhs),
                };
                result.ok_or(EngineError::ArithmeticOverflow { operation: self })
            },
            OverflowPolicy::Wrapping => Ok(match self {
                Self::Add => lhs.wrapping_add(rhs),
                Self::Subtract => lhs.wrapping_sub(rhs),
                Self::Multiply => lhs.wrapping_mul(rhs),
                Self::Divide => lhs.wrapping_div(rhs),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        };
        f.write_str(name)
    }
}

impl TryFrom<char> for Operation {
    type Error = EngineError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' | 'x' | '×' => Ok(Self::Multiply),
            '/' | '÷' => Ok(Self::Divide),
            other => Err(EngineError::InvalidOperation { symbol: other.to_string() }),
        }
    }
}

impl FromStr for Operation {
    type Err = EngineError;

    /// Parse a button symbol (`+`, `x`, ...) or an operation name (`add`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::try_from(c);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "subtract" | "sub" => Ok(Self::Subtract),
            "multiply" | "mul" => Ok(Self::Multiply),
            "divide" | "div" => Ok(Self::Divide),
            _ => Err(EngineError::InvalidOperation { symbol: trimmed.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_table() {
        let p = OverflowPolicy::Checked;
        assert_eq!(Operation::Add.apply(5, 6, p), Ok(11));
        assert_eq!(Operation::Subtract.apply(3, 8, p), Ok(-5));
        assert_eq!(Operation::Multiply.apply(-4, 3, p), Ok(-12));
        assert_eq!(Operation::Divide.apply(24, 2, p), Ok(12));
    }

    #[test]
    fn divide_truncates_toward_zero() {
        let p = OverflowPolicy::Checked;
        assert_eq!(Operation::Divide.apply(7, 2, p), Ok(3));
        assert_eq!(Operation::Divide.apply(-7, 2, p), Ok(-3));
    }

    #[test]
    fn divide_by_zero_under_both_policies() {
        assert_eq!(
            Operation::Divide.apply(1, 0, OverflowPolicy::Checked),
            Err(EngineError::DivisionByZero)
        );
        assert_eq!(
            Operation::Divide.apply(1, 0, OverflowPolicy::Wrapping),
            Err(EngineError::DivisionByZero)
        );
    }

    #[test]
    fn overflow_policies() {
        assert_eq!(
            Operation::Add.apply(i64::MAX, 1, OverflowPolicy::Checked),
            Err(EngineError::ArithmeticOverflow { operation: Operation::Add })
        );
        assert_eq!(Operation::Add.apply(i64::MAX, 1, OverflowPolicy::Wrapping), Ok(i64::MIN));
        assert_eq!(
            Operation::Multiply.apply(i64::MIN, 2, OverflowPolicy::Checked),
            Err(EngineError::ArithmeticOverflow { operation: Operation::Multiply })
        );
        assert_eq!(Operation::Subtract.apply(i64::MIN, 1, OverflowPolicy::Wrapping), Ok(i64::MAX));
    }

    #[test]
    fn parse_symbols_and_names() {
        assert_eq!("+".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("x".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("÷".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!(" Subtract ".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("div".parse::<Operation>(), Ok(Operation::Divide));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "%".parse::<Operation>(),
            Err(EngineError::InvalidOperation { symbol: "%".into() })
        );
        assert!(matches!(
            "modulo".parse::<Operation>(),
            Err(EngineError::InvalidOperation { symbol }) if symbol == "modulo"
        ));
    }

    #[test]
    fn symbols_round_trip_through_char() {
        for op in Operation::ALL {
            assert_eq!(Operation::try_from(op.symbol()), Ok(op));
        }
    }
}
