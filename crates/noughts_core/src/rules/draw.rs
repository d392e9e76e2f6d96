//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cell remains).
///
/// A full board with no winner is a draw; callers check for a win first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::Marker;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(4, Marker::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // x o x / o x x / o x o
        let mut board = Board::new();
        let layout = [
            Marker::X,
            Marker::O,
            Marker::X,
            Marker::O,
            Marker::X,
            Marker::X,
            Marker::O,
            Marker::X,
            Marker::O,
        ];
        for (index, marker) in layout.into_iter().enumerate() {
            board.place(index, marker);
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // x x x / o o x / x o o
        let mut board = Board::new();
        let layout = [
            Marker::X,
            Marker::X,
            Marker::X,
            Marker::O,
            Marker::O,
            Marker::X,
            Marker::X,
            Marker::O,
            Marker::O,
        ];
        for (index, marker) in layout.into_iter().enumerate() {
            board.place(index, marker);
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
