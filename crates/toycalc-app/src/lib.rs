//! Application layer for toycalc
//!
//! Pure state machines and a generic runtime shared by every front-end, so
//! a terminal, a scripted test and a future GUI all drive the calculator
//! through the same code.
//!
//! # Components
//!
//! - [`Key`]: Keypad buttons and the character mapping front-ends use
//! - [`App`]: Application state (engine, status line, running flag)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

mod action;
mod app;
mod driver;
mod event;
mod keypad;
mod runtime;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use keypad::{Key, KeypadError, parse_keys};
pub use runtime::Runtime;
pub use toycalc_core::{CalculatorEngine, EngineConfig, Operation, OverflowPolicy};
