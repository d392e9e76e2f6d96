//! Alternating turn invariant: players take turns in seat order.

use super::Invariant;
use crate::{GameController, Marker, Session};

/// Invariant: placements alternate between markers, starting with `x`.
///
/// While a game is in progress the player to move owns the marker that
/// follows the last placement. Once finished, the current player is the one
/// who made the final placement.
pub struct AlternatingTurnInvariant;

impl Invariant<GameController> for AlternatingTurnInvariant {
    fn holds(game: &GameController) -> bool {
        let history = game.history();

        let alternates = history.iter().enumerate().all(|(i, placement)| {
            let expected = if i % 2 == 0 { Marker::X } else { Marker::O };
            placement.marker == expected
        });
        if !alternates {
            return false;
        }

        let current = game.current_player().map(|player| player.marker());
        match game.session() {
            Session::Uninitialized => history.is_empty(),
            Session::InProgress { .. } => {
                let expected = match history.last() {
                    Some(last) => last.marker.opponent(),
                    None => Marker::X,
                };
                current == Some(expected)
            }
            Session::Finished { .. } => {
                history.last().map(|last| last.marker) == current
            }
        }
    }

    fn description() -> &'static str {
        "Turns alternate between players, starting with x"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        let mut game = GameController::new();
        game.init();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_occupied_retry() {
        let mut game = GameController::new();
        game.init();
        game.play_round(0);
        game.play_round(0);
        game.play_round(1);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_draw() {
        let mut game = GameController::new();
        game.init();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play_round(index);
        }
        assert!(!game.active());
        assert!(AlternatingTurnInvariant::holds(&game));
    }
}
