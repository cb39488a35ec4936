//! Keypad mapping.
//!
//! Maps key characters onto calculator buttons. Every front-end uses this
//! table, so typing `12+3=` behaves the same everywhere.

use thiserror::Error;
use toycalc_core::Operation;

/// A calculator button, or the key that leaves the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Digit button. Values above 9 are rejected by the engine.
    Digit(u8),
    /// Operator button
    Operation(Operation),
    /// `=` button
    Equals,
    /// Leave the calculator
    Quit,
}

/// Errors from parsing a key script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeypadError {
    /// Character that maps to no key
    #[error("unknown key {key:?} at offset {offset}")]
    UnknownKey {
        /// The unmapped character
        key: char,
        /// Byte offset in the script
        offset: usize,
    },
}

impl Key {
    /// Map a key character to a button.
    ///
    /// Returns `None` for characters with no button.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '=' | '\n' | '\r' => Some(Self::Equals),
            'q' | '\u{1b}' => Some(Self::Quit),
            other => Operation::try_from(other).ok().map(Self::Operation),
        }
    }

    /// Character printed on the button, `'?'` for a digit above 9.
    pub fn label(self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
            Self::Operation(op) => op.symbol(),
            Self::Equals => '=',
            Self::Quit => 'q',
        }
    }
}

/// Parse a key script such as `"5+6-3="`.
///
/// Spaces and tabs are skipped. Newlines count as equals.
pub fn parse_keys(script: &str) -> Result<Vec<Key>, KeypadError> {
    script
        .char_indices()
        .filter(|(_, c)| !matches!(c, ' ' | '\t'))
        .map(|(offset, key)| Key::from_char(key).ok_or(KeypadError::UnknownKey { key, offset }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits() {
        assert_eq!(parse_keys("07"), Ok(vec![Key::Digit(0), Key::Digit(7)]));
    }

    #[test]
    fn parse_operators() {
        assert_eq!(
            parse_keys("+-*/"),
            Ok(Operation::ALL.into_iter().map(Key::Operation).collect())
        );
        assert_eq!(Key::from_char('x'), Some(Key::Operation(Operation::Multiply)));
        assert_eq!(Key::from_char('÷'), Some(Key::Operation(Operation::Divide)));
    }

    #[test]
    fn parse_equals_variants() {
        assert_eq!(parse_keys("=\n\r"), Ok(vec![Key::Equals; 3]));
    }

    #[test]
    fn parse_quit() {
        assert_eq!(Key::from_char('q'), Some(Key::Quit));
        assert_eq!(Key::from_char('\u{1b}'), Some(Key::Quit));
    }

    #[test]
    fn parse_skips_blanks() {
        assert_eq!(
            parse_keys(" 1 +\t2 "),
            Ok(vec![Key::Digit(1), Key::Operation(Operation::Add), Key::Digit(2)])
        );
    }

    #[test]
    fn parse_unknown_reports_offset() {
        assert_eq!(parse_keys("12%3"), Err(KeypadError::UnknownKey { key: '%', offset: 2 }));
    }

    #[test]
    fn parse_empty() {
        assert_eq!(parse_keys(""), Ok(vec![]));
    }

    #[test]
    fn labels_map_back() {
        for c in "0123456789+-*/=q".chars() {
            let key = Key::from_char(c).unwrap();
            assert_eq!(key.label(), c);
        }
    }

    #[test]
    fn out_of_range_digit_label() {
        assert_eq!(Key::Digit(12).label(), '?');
        assert_eq!(Key::Digit(250).label(), '?');
    }
}
