//! Line-oriented front-end.
//!
//! Reads one command per line and re-renders after each one. Works on any
//! reader/writer pair, so sessions can be scripted or piped.

use crate::display::DisplayController;
use anyhow::{Context, Result};
use noughts_core::RoundOutcome;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Start or restart the game.
    Start,
    /// Leave the session.
    Quit,
    /// Show the command summary.
    Help,
    /// Select a cell (validated later by the display controller).
    Cell(String),
    /// Blank line.
    Nothing,
}

impl ConsoleCommand {
    /// Parses one input line.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => ConsoleCommand::Nothing,
            "start" | "restart" | "s" | "r" => ConsoleCommand::Start,
            "quit" | "exit" | "q" => ConsoleCommand::Quit,
            "help" | "?" => ConsoleCommand::Help,
            _ => ConsoleCommand::Cell(trimmed.to_string()),
        }
    }
}

const HELP: &str = "Commands: start|restart, 0-8 or a cell label (e.g. center), help, quit";

/// Output format of the console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleFormat {
    /// Human-readable board and message.
    #[default]
    Text,
    /// One JSON [`Screen`](crate::Screen) per line.
    Json,
}

/// Runs a console session until `quit` or end of input.
#[instrument(skip_all, fields(format = ?format))]
pub fn run_console<R, W>(
    display: &mut DisplayController,
    input: R,
    mut output: W,
    format: ConsoleFormat,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("Starting console session");
    render(display, &mut output, format)?;

    for line in input.lines() {
        let line = line.context("Failed to read input line")?;
        let command = ConsoleCommand::parse(&line);
        debug!(?command, "Console command");

        match command {
            ConsoleCommand::Nothing => continue,
            ConsoleCommand::Quit => {
                info!("User quit");
                break;
            }
            ConsoleCommand::Help => {
                note(&mut output, format, HELP)?;
                continue;
            }
            ConsoleCommand::Start => display.start(),
            ConsoleCommand::Cell(raw) => match display.select_cell(&raw) {
                Ok(RoundOutcome::Ignored(reason)) => {
                    note(&mut output, format, &format!("Move ignored: {reason}"))?;
                }
                Ok(_) => {}
                Err(e) => {
                    note(&mut output, format, &e.to_string())?;
                    continue;
                }
            },
        }

        render(display, &mut output, format)?;
    }

    output.flush().context("Failed to flush output")?;
    Ok(())
}

/// Writes the current screen.
fn render<W: Write>(display: &DisplayController, output: &mut W, format: ConsoleFormat) -> Result<()> {
    match format {
        ConsoleFormat::Text => {
            writeln!(output, "{}", display.board_text())?;
            let screen = display.screen();
            if !screen.message.is_empty() {
                writeln!(output, "{}", screen.message)?;
            }
            if !screen.active {
                writeln!(output, "[{}]", screen.button_label)?;
            }
            writeln!(output)?;
        }
        ConsoleFormat::Json => {
            let line = serde_json::to_string(&display.screen())
                .context("Failed to serialize screen")?;
            writeln!(output, "{line}")?;
        }
    }
    Ok(())
}

/// Writes a one-off notice that is not part of the screen.
fn note<W: Write>(output: &mut W, format: ConsoleFormat, text: &str) -> Result<()> {
    match format {
        ConsoleFormat::Text => writeln!(output, "{text}")?,
        ConsoleFormat::Json => writeln!(output, "{}", serde_json::json!({ "note": text }))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ConsoleCommand::parse("  Start "), ConsoleCommand::Start);
        assert_eq!(ConsoleCommand::parse("r"), ConsoleCommand::Start);
        assert_eq!(ConsoleCommand::parse("QUIT"), ConsoleCommand::Quit);
        assert_eq!(ConsoleCommand::parse("?"), ConsoleCommand::Help);
        assert_eq!(ConsoleCommand::parse(""), ConsoleCommand::Nothing);
        assert_eq!(
            ConsoleCommand::parse(" Top-left "),
            ConsoleCommand::Cell("Top-left".to_string())
        );
    }
}
