//! Settings validation integration tests.
//!
//! Each rule is exercised on its own where that is possible, then in
//! combination to pin the reporting order.

use turtle_challenge::core::{Board, Direction, GameSettings, Position};
use turtle_challenge::rules::{validate, Problem};

fn settings(board: Board, start: Position, exit: Position) -> GameSettings {
    GameSettings::new(board, start, exit, Direction::North)
}

fn messages(settings: &GameSettings) -> Vec<String> {
    validate(settings).iter().map(ToString::to_string).collect()
}

// =============================================================================
// Valid Settings
// =============================================================================

/// A regular board with everything in place has no problems.
#[test]
fn test_valid_settings() {
    let s = settings(Board::new(5, 5), Position::new(0, 0), Position::new(4, 4)).with_mines([
        Position::new(1, 2),
        Position::new(3, 1),
        Position::new(4, 1),
    ]);
    assert!(validate(&s).is_empty());
}

/// The smallest playable board is one row of two tiles.
#[test]
fn test_two_tile_board_is_valid() {
    let s = settings(Board::new(1, 2), Position::new(0, 0), Position::new(0, 1));
    assert!(validate(&s).is_empty());
}

// =============================================================================
// Single Rules
// =============================================================================

/// Start point outside the board.
#[test]
fn test_start_outside_board() {
    let s = settings(Board::new(5, 5), Position::new(5, 0), Position::new(4, 4));
    assert_eq!(messages(&s), vec!["Starting point is not valid for the game board."]);
}

/// Exit point outside the board.
#[test]
fn test_exit_outside_board() {
    let s = settings(Board::new(5, 5), Position::new(0, 0), Position::new(2, 5));
    assert_eq!(messages(&s), vec!["Exit point is not valid for the game board."]);
}

/// One mine outside the board is enough.
#[test]
fn test_mine_outside_board() {
    let s = settings(Board::new(5, 5), Position::new(0, 0), Position::new(4, 4))
        .with_mine(Position::new(1, 1))
        .with_mine(Position::new(0, 7));
    assert_eq!(messages(&s), vec!["Mine(s) are outside the game board."]);
}

/// A mine on the start location.
#[test]
fn test_mine_on_start() {
    let s = settings(Board::new(5, 5), Position::new(2, 2), Position::new(4, 4))
        .with_mine(Position::new(2, 2));
    assert_eq!(messages(&s), vec!["A mine is on the start location."]);
}

/// A mine on the exit location.
#[test]
fn test_mine_on_exit() {
    let s = settings(Board::new(5, 5), Position::new(0, 0), Position::new(4, 4))
        .with_mine(Position::new(1, 1))
        .with_mine(Position::new(4, 4));
    assert_eq!(messages(&s), vec!["A mine is on the exit location."]);
}

/// A one-tile board can only fail on start == exit.
#[test]
fn test_single_tile_board() {
    let s = settings(Board::new(1, 1), Position::new(0, 0), Position::new(0, 0));
    assert_eq!(messages(&s), vec!["Start and Exit locations can not be the same."]);
}

/// An empty board puts start and exit off it as well.
#[test]
fn test_zero_rows() {
    let s = settings(Board::new(3, 0), Position::new(0, 0), Position::new(1, 0));
    assert_eq!(
        validate(&s).as_slice(),
        &[
            Problem::InvalidBoard,
            Problem::StartOutsideBoard,
            Problem::ExitOutsideBoard,
        ]
    );
}

// =============================================================================
// Reporting Order
// =============================================================================

/// Rules 1 to 5 broken at once come back in rule order.
#[test]
fn test_lists_all_problems_in_order() {
    let s = settings(Board::new(4, 0), Position::new(1, 10), Position::new(4, 0)).with_mines([
        Position::new(1, 10),
        Position::new(2, 12),
        Position::new(2, 13),
        Position::new(45, 35),
    ]);

    assert_eq!(
        messages(&s),
        vec![
            "Game board has invalid rows / columns.",
            "Starting point is not valid for the game board.",
            "Exit point is not valid for the game board.",
            "Mine(s) are outside the game board.",
            "A mine is on the start location.",
        ]
    );
}

/// Mines on both start and exit, with start == exit.
#[test]
fn test_mine_problems_precede_start_is_exit() {
    let s = settings(Board::new(3, 3), Position::new(1, 1), Position::new(1, 1))
        .with_mine(Position::new(1, 1));
    assert_eq!(
        validate(&s).as_slice(),
        &[Problem::MineOnStart, Problem::MineOnExit, Problem::StartIsExit]
    );
}

/// Validation does not depend on the initial heading.
#[test]
fn test_heading_is_irrelevant() {
    for direction in Direction::ALL {
        let mut s = settings(Board::new(2, 2), Position::new(0, 0), Position::new(1, 1));
        s.direction = direction;
        assert!(validate(&s).is_empty());
    }
}
