//! `toycalc` binary entry point.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use toycalc_cli::{Args, Outcome};

fn main() -> ExitCode {
    let args = Args::parse();

    let result = toycalc_cli::logging::init(&args.log_level).and_then(|()| {
        let stdin = io::stdin().lock();
        toycalc_cli::run(&args, stdin, io::stdout().lock(), io::stdout())
    });

    match result {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected) => ExitCode::from(2),
        Err(err) => {
            let _ = writeln!(io::stderr(), "toycalc: {err}");
            ExitCode::FAILURE
        },
    }
}
