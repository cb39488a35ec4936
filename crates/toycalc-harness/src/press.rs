//! Button presses as plain data.
//!
//! [`Press`] is what model-based tests and fuzz targets generate. Digits are
//! deliberately allowed to go out of range so the invalid-argument path gets
//! exercised too.

use arbitrary::{Arbitrary, Unstructured};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use toycalc_core::{CalculatorEngine, EngineError, Operation};

/// A single button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// Digit button. Values above 9 are invalid and must be rejected.
    Digit(u8),
    /// Operator button
    Operation(Operation),
    /// Equals button
    Equals,
}

impl Press {
    /// Apply this press to a real engine.
    pub fn apply(self, engine: &mut CalculatorEngine) -> Result<(), EngineError> {
        match self {
            Self::Digit(digit) => engine.press_digit(digit),
            Self::Operation(operation) => engine.press_operation(operation),
            Self::Equals => engine.press_equals(),
        }
    }
}

impl<'a> Arbitrary<'a> for Press {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        // Weighted: 3 digit, 2 operation, 1 equals
        Ok(match u.int_in_range(0..=5u8)? {
            0..=2 => Self::Digit(u.int_in_range(0..=10u8)?),
            3 | 4 => Self::Operation(*u.choose(&Operation::ALL)?),
            _ => Self::Equals,
        })
    }
}

/// Deterministic press sequence for a seed.
///
/// Only valid digits are produced. The same seed always yields the same
/// sequence, so failures can be replayed from the seed alone.
pub fn seeded_presses(seed: u64, len: usize) -> Vec<Press> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| match rng.gen_range(0..10u8) {
            0..=5 => Press::Digit(rng.gen_range(0..10u8)),
            6..=8 => Press::Operation(Operation::ALL[rng.gen_range(0..Operation::ALL.len())]),
            _ => Press::Equals,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_deterministic() {
        assert_eq!(seeded_presses(7, 64), seeded_presses(7, 64));
        assert_ne!(seeded_presses(7, 64), seeded_presses(8, 64));
    }

    #[test]
    fn seeded_digits_valid() {
        for press in seeded_presses(42, 500) {
            if let Press::Digit(d) = press {
                assert!(d <= 9);
            }
        }
    }

    #[test]
    fn arbitrary_from_bytes() {
        let bytes = [0u8; 64];
        let mut u = Unstructured::new(&bytes);
        let press = Press::arbitrary(&mut u).unwrap();
        assert!(matches!(press, Press::Digit(0)));
    }

    #[test]
    fn apply_forwards_to_engine() {
        let mut engine = CalculatorEngine::new();
        Press::Digit(3).apply(&mut engine).unwrap();
        Press::Operation(Operation::Add).apply(&mut engine).unwrap();
        Press::Digit(4).apply(&mut engine).unwrap();
        Press::Equals.apply(&mut engine).unwrap();
        assert_eq!(engine.display(), "7");
        assert_eq!(Press::Digit(11).apply(&mut engine), Err(EngineError::InvalidDigit { digit: 11 }));
    }
}
