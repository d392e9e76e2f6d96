//! Tests for terminal UI key handling and rendering.

use crossterm::event::KeyCode;
use noughts::DisplayController;
use noughts::tui::{KeyAction, draw, handle_key};
use noughts_core::{Marker, Position};
use ratatui::{Terminal, backend::TestBackend};

fn press(display: &mut DisplayController, cursor: &mut Position, keys: &[KeyCode]) -> KeyAction {
    let mut action = KeyAction::Continue;
    for key in keys {
        action = handle_key(display, cursor, *key);
    }
    action
}

fn rendered_text(display: &DisplayController, cursor: Position) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let screen = display.screen();
    terminal.draw(|frame| draw(frame, &screen, cursor)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_start_then_cursor_play() {
    let mut display = DisplayController::default();
    let mut cursor = Position::TopLeft;

    press(
        &mut display,
        &mut cursor,
        &[KeyCode::Char('s'), KeyCode::Up, KeyCode::Left, KeyCode::Enter],
    );

    assert_eq!(cursor, Position::TopLeft);
    assert_eq!(
        display.game().board().cell(Position::TopLeft).marker(),
        Some(Marker::X)
    );
}

#[test]
fn test_digits_select_cells() {
    let mut display = DisplayController::default();
    let mut cursor = Position::Center;

    press(
        &mut display,
        &mut cursor,
        &[KeyCode::Char('s'), KeyCode::Char('1'), KeyCode::Char('9')],
    );

    assert_eq!(cursor, Position::BottomRight);
    assert_eq!(display.game().history().len(), 2);
    assert_eq!(display.screen().message, "x's turn.");
}

#[test]
fn test_keys_before_start_do_nothing() {
    let mut display = DisplayController::default();
    let mut cursor = Position::Center;

    press(&mut display, &mut cursor, &[KeyCode::Enter, KeyCode::Char('5')]);
    assert!(display.game().history().is_empty());
}

#[test]
fn test_quit_keys() {
    let mut display = DisplayController::default();
    let mut cursor = Position::Center;
    assert_eq!(
        handle_key(&mut display, &mut cursor, KeyCode::Char('q')),
        KeyAction::Quit
    );
    assert_eq!(handle_key(&mut display, &mut cursor, KeyCode::Esc), KeyAction::Quit);
}

#[test]
fn test_render_shows_status() {
    let mut display = DisplayController::default();
    let text = rendered_text(&display, Position::Center);
    assert!(text.contains("Press s: Start"));

    let mut cursor = Position::Center;
    press(
        &mut display,
        &mut cursor,
        &[KeyCode::Char('s'), KeyCode::Char('5')],
    );
    let text = rendered_text(&display, cursor);
    assert!(text.contains("o's turn."));
}
