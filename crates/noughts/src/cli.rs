//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the display configuration file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive terminal UI
    Tui,

    /// Play line by line on stdin/stdout
    Console {
        /// Emit one JSON screen per update instead of a text board
        #[arg(long)]
        json: bool,
    },
}
