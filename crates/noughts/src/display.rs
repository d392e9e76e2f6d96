//! Display controller: the presentation side of the game.
//!
//! Maps user actions (start button, cell selection) onto the
//! [`GameController`] and turns its state into a [`Screen`] to render. It
//! never decides results itself; it only reads the board snapshot and the
//! result message.

use crate::config::DisplayConfig;
use noughts_core::{Cell, GameController, Position, PositionParseError, Rejection, RoundOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Cell glyphs in row-major order.
    pub cells: Vec<String>,
    /// Status message from the game.
    pub message: String,
    /// Label for the start/restart control.
    pub button_label: String,
    /// Whether cells are currently clickable.
    pub active: bool,
}

/// Owns the long-lived game and the presentation state around it.
#[derive(Debug, Clone)]
pub struct DisplayController {
    game: GameController,
    config: DisplayConfig,
    started: bool,
}

impl DisplayController {
    /// Creates a controller with no game started.
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            game: GameController::new(),
            config,
            started: false,
        }
    }

    /// Handles the start/restart button.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.game.init();
        if !self.started {
            info!("First game started");
        }
        self.started = true;
    }

    /// Handles a selected cell given as raw user input.
    ///
    /// The input is validated here, before it reaches the game. Parse errors
    /// go back to the caller; everything else is a [`RoundOutcome`].
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, raw: &str) -> Result<RoundOutcome, PositionParseError> {
        let position = Position::parse_input(raw)?;
        Ok(self.select(position))
    }

    /// Handles a selected cell.
    ///
    /// Forwarded only while the game is active.
    #[instrument(skip(self))]
    pub fn select(&mut self, position: Position) -> RoundOutcome {
        if !self.game.active() {
            debug!("Cell selected while no game is active");
            return RoundOutcome::Ignored(Rejection::NotActive);
        }
        self.game.play_round(position.to_index())
    }

    /// Builds the view model for the current state.
    pub fn screen(&self) -> Screen {
        Screen {
            cells: self
                .game
                .snapshot()
                .iter()
                .map(|cell| self.glyph(*cell))
                .collect(),
            message: self.game.result_message(),
            button_label: self.button_label().to_string(),
            active: self.game.active(),
        }
    }

    /// Renders the board as plain text, one row per line.
    pub fn board_text(&self) -> String {
        let cells = self.screen().cells;
        cells
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|glyph| format!(" {glyph} "))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n---+---+---\n")
    }

    /// Returns the start button label.
    pub fn button_label(&self) -> &str {
        if self.started {
            self.config.restart_label().as_str()
        } else {
            self.config.start_label().as_str()
        }
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    fn glyph(&self, cell: Cell) -> String {
        match cell {
            Cell::Empty => self.config.empty_glyph().clone(),
            Cell::Marked(marker) => marker.to_string(),
        }
    }
}

impl Default for DisplayController {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}
