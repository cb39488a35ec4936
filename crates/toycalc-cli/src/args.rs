//! Command-line arguments.

use clap::{Parser, ValueEnum};
use toycalc_core::{EngineConfig, MAX_DIGITS, OverflowPolicy};

/// Four-function pocket calculator.
///
/// Keys: 0-9, + - * /, = (or Enter inside a script), q to quit.
#[derive(Debug, Clone, Parser)]
#[command(name = "toycalc", version, about)]
pub struct Args {
    /// Key script to evaluate, e.g. "5+6-3=". Reads lines from stdin if
    /// omitted.
    pub keys: Option<String>,

    /// Digits the input field accepts (1-18)
    #[arg(long, default_value_t = MAX_DIGITS)]
    pub max_digits: u32,

    /// What to do when a result leaves the 64-bit range
    #[arg(long, value_enum, default_value_t = OverflowArg::Checked)]
    pub overflow: OverflowArg,

    /// Print every display update, not just the final one
    #[arg(long)]
    pub trace: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Overflow policy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverflowArg {
    /// Report an error and keep the previous result
    Checked,
    /// Wrap around like fixed-width hardware
    Wrapping,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Checked => Self::Checked,
            OverflowArg::Wrapping => Self::Wrapping,
        }
    }
}

impl Args {
    /// Engine configuration selected by the flags.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig { max_digits: self.max_digits, overflow: self.overflow.into() }
    }
}
