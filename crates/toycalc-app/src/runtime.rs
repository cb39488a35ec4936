//! Generic runtime loop.
//!
//! Pulls events from a [`Driver`], feeds them to the [`App`] and executes the
//! resulting actions.

use tracing::debug;

use crate::{App, AppAction, Driver};

/// Orchestrates an [`App`] over a [`Driver`].
#[derive(Debug)]
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// The application state.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run until input is exhausted or the app quits.
    ///
    /// Renders once before reading any input so the initial display is
    /// shown. The driver is stopped on every exit path.
    ///
    /// # Errors
    ///
    /// Returns the first driver error.
    pub fn run(&mut self) -> Result<(), D::Error> {
        let result = self.run_loop();
        self.driver.stop();
        result
    }

    fn run_loop(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        while let Some(event) = self.driver.poll_event()? {
            for action in self.app.handle(event) {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => {
                        debug!("runtime stopping on quit");
                        return Ok(());
                    },
                }
            }
        }

        debug!("runtime stopping, input exhausted");
        Ok(())
    }

    /// Consume the runtime, returning the driver and app.
    pub fn into_parts(self) -> (D, App) {
        (self.driver, self.app)
    }
}
