//! Logging setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

/// Install a stderr subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init(default_filter: &str) -> Result<(), CliError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(default_filter)?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

fn parse_filter(directives: &str) -> Result<EnvFilter, CliError> {
    Ok(EnvFilter::try_new(directives)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_accepted() {
        for level in ["warn", "debug", "toycalc_core=trace,info"] {
            assert!(parse_filter(level).is_ok(), "{level}");
        }
    }

    #[test]
    fn bad_level_is_a_filter_error() {
        assert!(matches!(parse_filter("toycalc_core=loud"), Err(CliError::LogFilter(_))));
    }
}
