//! Scenario builder API.
//!
//! Provides a declarative API for constructing scenario tests that enforce
//! the Oracle Pattern.

use std::{cell::RefCell, rc::Rc};

use toycalc_app::{Key, parse_keys};
use toycalc_core::{CalculatorEngine, EngineConfig};
use tracing::debug;

use crate::scenario::{OracleFn, RejectedPress, Transcript};

/// Scenario builder.
///
/// Configure the engine and the key script, then call `.oracle()` to get a
/// [`RunnableScenario`].
pub struct Scenario {
    name: String,
    config: EngineConfig,
    script: String,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), config: EngineConfig::default(), script: String::new() }
    }

    /// Use a custom engine configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Append keys to the script.
    ///
    /// May be called repeatedly; scripts are concatenated.
    pub fn keys(mut self, script: &str) -> Self {
        self.script.push_str(script);
        self
    }

    /// Set the oracle function and return a runnable scenario.
    ///
    /// The oracle is mandatory - you cannot run a scenario without
    /// verification.
    pub fn oracle(self, oracle: OracleFn) -> RunnableScenario {
        RunnableScenario { scenario: self, oracle }
    }
}

/// A scenario with an oracle function that can be executed.
pub struct RunnableScenario {
    scenario: Scenario,
    oracle: OracleFn,
}

impl RunnableScenario {
    /// Execute the scenario.
    ///
    /// 1. Build an engine from the configuration
    /// 2. Parse the script and press each key, recording display updates
    ///    and rejected presses; a quit key stops the script
    /// 3. Hand the transcript to the oracle
    ///
    /// Setup failures (bad configuration, unparseable script) and oracle
    /// failures are both reported as `Err`.
    pub fn run(self) -> Result<(), String> {
        let name = self.scenario.name;

        let mut engine = CalculatorEngine::with_config(self.scenario.config)
            .map_err(|e| format!("Scenario '{name}': invalid config: {e}"))?;

        let keys = parse_keys(&self.scenario.script)
            .map_err(|e| format!("Scenario '{name}': invalid script: {e}"))?;

        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&updates);
        engine.add_display_listener(move |display| sink.borrow_mut().push(display.to_owned()));

        let mut rejected = Vec::new();
        let mut quit_early = false;

        for (index, key) in keys.iter().copied().enumerate() {
            let result = match key {
                Key::Digit(digit) => engine.press_digit(digit),
                Key::Operation(operation) => engine.press_operation(operation),
                Key::Equals => engine.press_equals(),
                Key::Quit => {
                    quit_early = index + 1 < keys.len();
                    break;
                },
            };

            if let Err(error) = result {
                debug!(scenario = %name, index, %error, "press rejected");
                rejected.push(RejectedPress { index, key, error });
            }
        }

        let transcript = Transcript {
            updates: updates.take(),
            rejected,
            final_display: engine.display(),
            final_state: *engine.state(),
            quit_early,
            name,
        };

        (self.oracle)(&transcript)
            .map_err(|e| format!("Scenario '{}': oracle failed: {e}", transcript.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_requires_oracle() {
        // This should compile - oracle provided
        let _scenario = Scenario::new("test").keys("1").oracle(Box::new(|_| Ok(())));

        // This should NOT compile - no oracle
        // let scenario = Scenario::new("test").keys("1");
        // scenario.run(); // ERROR: no method `run` on type `Scenario`
    }

    #[test]
    fn scenario_records_updates() {
        let scenario = Scenario::new("test").keys("12").keys("+3=").oracle(Box::new(|t| {
            assert_eq!(t.updates, ["1", "12", "12", "3", "15"]);
            assert_eq!(t.final_display, "15");
            assert!(t.is_clean());
            Ok(())
        }));

        scenario.run().unwrap();
    }

    #[test]
    fn scenario_reports_setup_errors() {
        let bad_config = EngineConfig { max_digits: 40, ..Default::default() };
        let err = Scenario::new("cfg")
            .config(bad_config)
            .oracle(Box::new(|_| Ok(())))
            .run()
            .unwrap_err();
        assert!(err.starts_with("Scenario 'cfg': invalid config"), "{err}");

        let err = Scenario::new("script").keys("1?").oracle(Box::new(|_| Ok(()))).run().unwrap_err();
        assert!(err.contains("unknown key '?'"), "{err}");
    }

    #[test]
    fn scenario_stops_at_quit() {
        Scenario::new("quit")
            .keys("4q5")
            .oracle(Box::new(|t| {
                assert_eq!(t.final_display, "4");
                assert!(t.quit_early);
                Ok(())
            }))
            .run()
            .unwrap();
    }
}
