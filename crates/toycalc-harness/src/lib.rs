//! Test harness for the toycalc engine.
//!
//! A reference model to cross-check the engine against, press generators
//! (arbitrary and seeded) and a scenario builder that enforces an oracle on
//! every run.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod press;
pub mod scenario;

pub use model::ModelCalculator;
pub use press::{Press, seeded_presses};
