//! Noughts front-ends.
//!
//! The presentation side of the `noughts_core` engine: a display controller
//! that owns the long-lived game, a line-oriented console session and an
//! interactive terminal UI, plus their configuration.
//!
//! # Example
//!
//! ```
//! use noughts::{DisplayConfig, DisplayController};
//!
//! let mut display = DisplayController::new(DisplayConfig::default());
//! display.start();
//! display.select_cell("4").unwrap();
//! assert_eq!(display.screen().message, "o's turn.");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod display;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DisplayConfig};
pub use console::{ConsoleCommand, ConsoleFormat, run_console};
pub use display::{DisplayController, Screen};
