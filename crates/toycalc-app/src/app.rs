//! Application state machine.
//!
//! Forwards key presses to the calculator engine and keeps the status line
//! front-ends show under the display. Pure: no I/O, no time.

use toycalc_core::CalculatorEngine;
use tracing::debug;

use crate::{
    action::AppAction,
    event::AppEvent,
    keypad::{Key, parse_keys},
};

/// Application state.
#[derive(Debug)]
pub struct App {
    engine: CalculatorEngine,
    status: Option<String>,
    running: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(CalculatorEngine::new())
    }
}

impl App {
    /// Create an app around an engine.
    ///
    /// Listeners already registered on the engine keep firing.
    pub fn new(engine: CalculatorEngine) -> Self {
        Self { engine, status: None, running: true }
    }

    /// Text currently on the calculator display.
    pub fn display(&self) -> String {
        self.engine.display()
    }

    /// Error from the last handled event, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Whether a quit key has not been pressed yet.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The underlying engine.
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Mutable access to the engine, e.g. to register display listeners.
    pub fn engine_mut(&mut self) -> &mut CalculatorEngine {
        &mut self.engine
    }

    /// Handle one event and return the actions for the runtime.
    ///
    /// The status line is cleared at the start of every event and set by the
    /// first failure within it. A rejected press does not stop the rest of a
    /// script. An unparseable script is rejected as a whole before any key
    /// is pressed.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        if !self.running {
            return vec![];
        }

        self.status = None;

        let keys = match event {
            AppEvent::Key(key) => vec![key],
            AppEvent::Text(script) => match parse_keys(&script) {
                Ok(keys) => keys,
                Err(err) => {
                    debug!(%err, "rejected key script");
                    self.status = Some(err.to_string());
                    return vec![AppAction::Render];
                },
            },
        };

        for key in keys {
            if key == Key::Quit {
                debug!("quit key pressed");
                self.running = false;
                return vec![AppAction::Render, AppAction::Quit];
            }
            self.press(key);
        }

        vec![AppAction::Render]
    }

    fn press(&mut self, key: Key) {
        let result = match key {
            Key::Digit(digit) => self.engine.press_digit(digit),
            Key::Operation(operation) => self.engine.press_operation(operation),
            Key::Equals => self.engine.press_equals(),
            Key::Quit => Ok(()),
        };

        if let Err(err) = result {
            debug!(?key, %err, "key press rejected");
            if self.status.is_none() {
                self.status = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use toycalc_core::Operation;

    use super::*;

    #[test]
    fn key_events_drive_engine() {
        let mut app = App::default();
        assert_eq!(app.handle(AppEvent::Key(Key::Digit(4))), vec![AppAction::Render]);
        app.handle(AppEvent::Key(Key::Operation(Operation::Multiply)));
        app.handle(AppEvent::Key(Key::Digit(5)));
        app.handle(AppEvent::Key(Key::Equals));
        assert_eq!(app.display(), "20");
        assert_eq!(app.status(), None);
    }

    #[test]
    fn text_event_runs_script() {
        let mut app = App::default();
        assert_eq!(app.handle(AppEvent::Text("5+6-3=".into())), vec![AppAction::Render]);
        assert_eq!(app.display(), "8");
    }

    #[test]
    fn bad_script_rejected_whole() {
        let mut app = App::default();
        app.handle(AppEvent::Text("12".into()));
        app.handle(AppEvent::Text("3%4".into()));
        assert_eq!(app.display(), "12");
        assert_eq!(app.status(), Some("unknown key '%' at offset 1"));
    }

    #[test]
    fn engine_error_sets_status_until_next_event() {
        let mut app = App::default();
        app.handle(AppEvent::Text("8/=".into()));
        assert_eq!(app.status(), Some("division by zero"));
        assert_eq!(app.display(), "8");

        app.handle(AppEvent::Text("2=".into()));
        assert_eq!(app.status(), None);
        assert_eq!(app.display(), "4");
    }

    #[test]
    fn quit_stops_script_and_app() {
        let mut app = App::default();
        let actions = app.handle(AppEvent::Text("7q8".into()));
        assert_eq!(actions, vec![AppAction::Render, AppAction::Quit]);
        assert_eq!(app.display(), "7");
        assert!(!app.is_running());

        assert!(app.handle(AppEvent::Key(Key::Digit(1))).is_empty());
        assert_eq!(app.display(), "7");
    }

    #[test]
    fn out_of_range_digit_key_sets_status() {
        let mut app = App::default();
        app.handle(AppEvent::Text("3".into()));

        assert_eq!(app.handle(AppEvent::Key(Key::Digit(250))), vec![AppAction::Render]);
        assert_eq!(app.status(), Some("invalid digit 250, expected 0-9"));
        assert_eq!(app.display(), "3");
    }
}
