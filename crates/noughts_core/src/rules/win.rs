//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Marker, Position};
use tracing::instrument;

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// A line wins when its three cells are non-empty and identical.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.cell(a);
        match cell {
            Cell::Marked(marker) if cell == board.cell(b) && cell == board.cell(c) => Some(marker),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Marker)]) -> Board {
        let mut board = Board::new();
        for (pos, marker) in marks {
            assert!(board.place(pos.to_index(), *marker));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(&line.map(|pos| (pos, Marker::O)));
            assert_eq!(check_winner(&board), Some(Marker::O), "line {line:?}");
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[
            (Position::TopLeft, Marker::X),
            (Position::TopCenter, Marker::O),
            (Position::TopRight, Marker::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Marker::X),
            (Position::TopCenter, Marker::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }
}
