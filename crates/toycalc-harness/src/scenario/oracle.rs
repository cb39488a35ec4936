//! Ready-made oracles.

use toycalc_core::EngineError;

use crate::scenario::{OracleFn, Transcript};

/// Final display equals `expected`.
pub fn display_is(expected: impl Into<String>) -> OracleFn {
    let expected = expected.into();
    Box::new(move |t: &Transcript| {
        if t.final_display == expected {
            Ok(())
        } else {
            Err(format!("expected display {expected:?}, got {:?}", t.final_display))
        }
    })
}

/// Listeners saw exactly these display updates.
pub fn updates_are(expected: &[&str]) -> OracleFn {
    let expected: Vec<String> = expected.iter().map(|s| (*s).to_string()).collect();
    Box::new(move |t: &Transcript| {
        if t.updates == expected {
            Ok(())
        } else {
            Err(format!("expected updates {expected:?}, got {:?}", t.updates))
        }
    })
}

/// No press was rejected.
pub fn no_errors() -> OracleFn {
    Box::new(|t: &Transcript| match t.rejected.first() {
        None => Ok(()),
        Some(r) => Err(format!("press {} {:?} rejected: {}", r.index, r.key.label(), r.error)),
    })
}

/// At least one press was rejected with `error`.
pub fn rejected_with(error: EngineError) -> OracleFn {
    Box::new(move |t: &Transcript| {
        if t.rejected.iter().any(|r| r.error == error) {
            Ok(())
        } else {
            Err(format!("expected a press rejected with {error}, got {:?}", t.rejected))
        }
    })
}

/// Every oracle passes; reports the first failure.
pub fn all_of(oracles: Vec<OracleFn>) -> OracleFn {
    Box::new(move |t: &Transcript| oracles.iter().try_for_each(|oracle| oracle(t)))
}
