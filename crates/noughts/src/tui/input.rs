//! Keyboard handling for the terminal UI.

use crate::display::DisplayController;
use crossterm::event::KeyCode;
use noughts_core::{Position, RoundOutcome};
use tracing::debug;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Redraw and keep going.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Moves cursor based on arrow keys. Stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Applies one key press to the display controller and cursor.
///
/// Arrows move the cursor, Enter/space select it, digits 1-9 select a cell
/// directly (keypad order), `s`/`r` start or restart, `q`/Esc quit.
pub fn handle_key(
    display: &mut DisplayController,
    cursor: &mut Position,
    key: KeyCode,
) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Char('s') | KeyCode::Char('r') => {
            display.start();
            *cursor = Position::Center;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            report(display.select(*cursor));
        }
        KeyCode::Char(c) if ('1'..='9').contains(&c) => {
            let index = c as usize - '1' as usize;
            if let Some(position) = Position::from_index(index) {
                *cursor = position;
                report(display.select(position));
            }
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            *cursor = move_cursor(*cursor, key);
        }
        _ => {}
    }
    KeyAction::Continue
}

fn report(outcome: RoundOutcome) {
    debug!(?outcome, "Cell selected");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }
}
