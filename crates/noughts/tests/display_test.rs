//! Tests for the display controller.

use noughts::{DisplayConfig, DisplayController};
use noughts_core::{Marker, Position, Rejection, RoundOutcome};

fn started() -> DisplayController {
    let mut display = DisplayController::default();
    display.start();
    display
}

#[test]
fn test_button_label_switches_after_first_start() {
    let mut display = DisplayController::default();
    assert_eq!(display.button_label(), "Start");
    assert!(!display.screen().active);

    display.start();
    assert_eq!(display.button_label(), "Restart");

    display.start();
    assert_eq!(display.screen().button_label, "Restart");
}

#[test]
fn test_selection_before_start_is_ignored() {
    let mut display = DisplayController::default();
    assert_eq!(
        display.select_cell("4"),
        Ok(RoundOutcome::Ignored(Rejection::NotActive))
    );
    assert!(display.game().history().is_empty());
}

#[test]
fn test_bad_input_rejected_at_boundary() {
    let mut display = started();
    for raw in ["9", "-1", "abc", "", "4.0"] {
        assert!(display.select_cell(raw).is_err(), "input {raw:?}");
    }
    // Nothing reached the game.
    assert!(display.game().history().is_empty());
    assert_eq!(display.screen().message, "");
}

#[test]
fn test_labels_select_cells() {
    let mut display = started();
    assert_eq!(
        display.select_cell("center"),
        Ok(RoundOutcome::Continued { next: Marker::O })
    );
    assert_eq!(display.screen().cells[Position::Center.to_index()], "x");
}

#[test]
fn test_screen_reflects_game() {
    let mut display = started();
    for raw in ["0", "3", "1", "4", "2"] {
        display.select_cell(raw).unwrap();
    }

    let screen = display.screen();
    assert!(!screen.active);
    assert_eq!(screen.message, "Player x wins!");
    assert_eq!(screen.cells, vec!["x", "x", "x", "o", "o", " ", " ", " ", " "]);
}

#[test]
fn test_selection_after_win_is_ignored() {
    let mut display = started();
    for raw in ["0", "3", "1", "4", "2"] {
        display.select_cell(raw).unwrap();
    }
    let before = display.screen();

    assert_eq!(
        display.select(Position::BottomRight),
        RoundOutcome::Ignored(Rejection::NotActive)
    );
    assert_eq!(display.screen(), before);
}

#[test]
fn test_restart_clears_screen() {
    let mut display = started();
    display.select_cell("4").unwrap();
    display.start();

    let screen = display.screen();
    assert!(screen.active);
    assert_eq!(screen.message, "");
    assert!(screen.cells.iter().all(|cell| cell == " "));
}

#[test]
fn test_board_text_uses_configured_glyph() {
    let config = DisplayConfig::from_toml("empty_glyph = \".\"").unwrap();
    let mut display = DisplayController::new(config);
    display.start();
    display.select(Position::TopLeft);

    assert_eq!(
        display.board_text(),
        " x | . | . \n---+---+---\n . | . | . \n---+---+---\n . | . | . "
    );
}
