//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, GameController};

/// Invariant: board cells are monotonic (never overwritten).
///
/// Replays the placement history onto an empty board. Every placement must
/// land on an empty cell and the result must match the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameController> for MonotonicBoardInvariant {
    fn holds(game: &GameController) -> bool {
        let mut reconstructed = Board::new();

        for placement in game.history() {
            if !reconstructed.place(placement.position.to_index(), placement.marker) {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
