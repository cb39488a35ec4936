//! Scenario testing with mandatory oracles.
//!
//! A scenario names a key script and a configuration, runs it against a
//! fresh engine and hands the resulting [`Transcript`] to an oracle. A
//! scenario without an oracle cannot be run.
//!
//! ```
//! use toycalc_harness::scenario::{Scenario, oracle};
//!
//! let result = Scenario::new("repeat divide")
//!     .keys("5+6-3=*3/2===")
//!     .oracle(oracle::display_is("3"))
//!     .run();
//! assert!(result.is_ok());
//! ```

mod builder;
pub mod oracle;
mod transcript;

pub use builder::{RunnableScenario, Scenario};
pub use transcript::{RejectedPress, Transcript};

/// Verification run against a finished scenario.
pub type OracleFn = Box<dyn Fn(&Transcript) -> Result<(), String>>;
