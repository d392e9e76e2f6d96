//! Noughts - terminal tic-tac-toe
//!
//! Hosts one long-lived display controller and hands it to the chosen
//! front-end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, ConsoleFormat, DisplayConfig, DisplayController, run_console, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DisplayConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Tui => {
            initialize_file_tracing(&config)?;
            let mut display = DisplayController::new(config);
            tui::run_tui(&mut display)
        }
        Command::Console { json } => {
            initialize_stderr_tracing(&config);
            let format = if json {
                ConsoleFormat::Json
            } else {
                ConsoleFormat::Text
            };
            run_console_session(config, format)
        }
    }
}

#[instrument(skip(config))]
fn run_console_session(config: DisplayConfig, format: ConsoleFormat) -> Result<()> {
    let mut display = DisplayController::new(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_console(&mut display, stdin.lock(), stdout.lock(), format)
}

fn env_filter(config: &DisplayConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to stderr so stdout stays clean for the board (or JSON).
fn initialize_stderr_tracing(config: &DisplayConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();

    info!("Console tracing initialized");
}

/// Logs to a file so output does not interfere with the TUI.
fn initialize_file_tracing(config: &DisplayConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("TUI tracing initialized");
    Ok(())
}
