//! Line-oriented driver.
//!
//! Each input line is one key script. The display is written after every
//! line, followed by an `error:` line when the app reports a status.

use std::io::{self, BufRead, Write};

use toycalc_app::{App, AppEvent, Driver};
use tracing::debug;

/// Driver over any buffered reader and writer (stdin/stdout in `main`).
#[derive(Debug)]
pub struct LineDriver<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> LineDriver<R, W> {
    /// Create a driver.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, line: String::new() }
    }

    /// Consume the driver, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Driver for LineDriver<R, W> {
    type Error = io::Error;

    fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }

        // The line terminator ends the script; it is not an equals press
        let script = self.line.trim_end_matches(['\n', '\r']);
        Ok(Some(AppEvent::Text(script.to_owned())))
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        writeln!(self.output, "{}", app.display())?;
        if let Some(status) = app.status() {
            writeln!(self.output, "error: {status}")?;
        }
        self.output.flush()
    }

    fn stop(&mut self) {
        if let Err(err) = self.output.flush() {
            debug!(%err, "flush at shutdown failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use toycalc_app::Runtime;

    use super::*;

    fn session(input: &str) -> String {
        let driver = LineDriver::new(Cursor::new(input.to_owned()), Vec::new());
        let mut runtime = Runtime::new(driver, App::default());
        runtime.run().unwrap();
        let (driver, _) = runtime.into_parts();
        String::from_utf8(driver.into_output()).unwrap()
    }

    #[test]
    fn one_display_per_line() {
        insta::assert_snapshot!(session("12+\n3=\n=\n"), @r"
        0
        12
        15
        18
        ");
    }

    #[test]
    fn crlf_lines() {
        assert_eq!(session("4*4=\r\n"), "0\n16\n");
    }

    #[test]
    fn errors_reported_inline() {
        insta::assert_snapshot!(session("5/0=\nabc\n"), @r"
        0
        0
        error: division by zero
        0
        error: unknown key 'a' at offset 0
        ");
    }

    #[test]
    fn quit_ends_session() {
        assert_eq!(session("7\nq\n8\n"), "0\n7\n7\n");
    }

    #[test]
    fn empty_input() {
        assert_eq!(session(""), "0\n");
    }
}
