//! Toycalc core logic
//!
//! Pure state machine for a classic four-function pocket calculator,
//! completely decoupled from any presentation layer.
//!
//! # Architecture
//!
//! The [`CalculatorEngine`] interprets three kinds of button press (digit,
//! operator, equals) and decides which number the display shows. It performs
//! no I/O. Front-ends drive it by calling the press methods and learn about
//! display changes through listeners registered on the engine itself.
//!
//! Every press either completes fully or fails without touching the state.
//! Arithmetic is computed into locals first and only committed on success,
//! so a rejected division by zero or overflow leaves the calculator exactly
//! where it was.
//!
//! # Components
//!
//! - [`engine`]: The calculator state machine
//! - [`state`]: Observable calculator state
//! - [`operation`]: The four arithmetic operations
//! - [`listeners`]: Display listener registry
//! - [`config`]: Engine configuration (digit limit, overflow policy)
//! - [`error`]: Engine and configuration error types

pub mod config;
pub mod engine;
pub mod error;
pub mod listeners;
pub mod operation;
pub mod state;

pub use config::{EngineConfig, MAX_DIGITS, OverflowPolicy};
pub use engine::CalculatorEngine;
pub use error::{ConfigError, EngineError};
pub use listeners::{DisplayListeners, ListenerId};
pub use operation::Operation;
pub use state::{ActiveField, CalculatorState};
