//! Front-end errors.

use thiserror::Error;
use toycalc_core::ConfigError;
use tracing_subscriber::{filter::ParseError, util::TryInitError};

/// Errors that end a toycalc run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Flags describe an impossible engine
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Reading input or writing the display failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `--log-level` is not a valid filter directive
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] ParseError),

    /// Tracing subscriber could not be installed
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] TryInitError),
}
