//! Terminal UI front-end.

mod input;
mod ui;

pub use input::{KeyAction, handle_key, move_cursor};
pub use ui::draw;

use crate::display::DisplayController;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::Position;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the interactive terminal UI until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip_all)]
pub fn run_tui(display: &mut DisplayController) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, display);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI loop failed");
    }
    info!("Terminal UI closed");
    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    display: &mut DisplayController,
) -> Result<()> {
    let mut cursor = Position::Center;

    loop {
        let screen = display.screen();
        terminal.draw(|frame| draw(frame, &screen, cursor))?;

        if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
            // Windows reports releases too.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(display, &mut cursor, key.code) == KeyAction::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
