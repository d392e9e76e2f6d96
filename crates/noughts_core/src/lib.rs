//! Tic-tac-toe game engine.
//!
//! Tracks board state, alternates players and detects win/draw conditions.
//! A presentation layer drives it through [`GameController`]: call
//! [`GameController::init`] to (re)start, forward selected cells to
//! [`GameController::play_round`], then re-read the board snapshot and
//! [`GameController::result_message`] to render.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameController, Marker};
//!
//! let mut game = GameController::new();
//! game.init();
//! for index in [0, 3, 1, 4, 2] {
//!     game.play_round(index);
//! }
//! assert!(!game.active());
//! assert_eq!(game.result_message(), "Player x wins!");
//! assert_eq!(game.outcome().and_then(|o| o.winner()), Some(Marker::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod invariants;
mod player;
mod position;
mod rules;
mod types;

pub use controller::{
    Announcement, GameController, Outcome, Placement, Rejection, RoundOutcome, Session,
    TurnNotice,
};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant,
};
pub use player::{Player, Seat};
pub use position::{Position, PositionParseError};
pub use rules::{LINES, check_winner, is_full};
pub use types::{BOARD_SIZE, Board, Cell, Marker};
