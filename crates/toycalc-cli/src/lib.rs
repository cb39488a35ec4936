//! Terminal front-end for toycalc
//!
//! A thin shell over [`toycalc_app::Driver`] that reads key scripts from the
//! command line or standard input. All orchestration logic lives in the
//! generic [`toycalc_app::Runtime`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod args;
pub mod error;
pub mod line;
pub mod logging;

use std::io::{BufRead, Write};

pub use args::{Args, OverflowArg};
pub use error::CliError;
pub use line::LineDriver;
use toycalc_app::{App, AppEvent, CalculatorEngine, Runtime};
use tracing::{debug, info};

/// Outcome of a run, mapped to the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every press succeeded
    Clean,
    /// A script passed as an argument had a rejected press
    Rejected,
}

/// Run the calculator with parsed arguments.
///
/// With a key script in `args`, evaluates it and writes the final display
/// to `output`. Otherwise runs an interactive session over `input`.
pub fn run<R: BufRead, W: Write>(
    args: &Args,
    input: R,
    output: W,
    trace_output: impl Write + 'static,
) -> Result<Outcome, CliError> {
    let mut engine = CalculatorEngine::with_config(args.engine_config())?;
    info!(config = ?engine.config(), "calculator ready");

    if args.trace {
        let mut sink = trace_output;
        engine.add_display_listener(move |display| {
            if let Err(err) = writeln!(sink, "> {display}") {
                debug!(%err, "trace write failed");
            }
        });
    }

    let app = App::new(engine);
    match &args.keys {
        Some(script) => run_script(app, script, output),
        None => run_session(app, input, output),
    }
}

fn run_script<W: Write>(mut app: App, script: &str, mut output: W) -> Result<Outcome, CliError> {
    app.handle(AppEvent::Text(script.to_owned()));
    writeln!(output, "{}", app.display())?;

    match app.status() {
        Some(status) => {
            writeln!(output, "error: {status}")?;
            Ok(Outcome::Rejected)
        },
        None => Ok(Outcome::Clean),
    }
}

fn run_session<R: BufRead, W: Write>(app: App, input: R, output: W) -> Result<Outcome, CliError> {
    let mut runtime = Runtime::new(LineDriver::new(input, output), app);
    runtime.run()?;
    Ok(Outcome::Clean)
}
