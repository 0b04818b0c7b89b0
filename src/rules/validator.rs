//! Game settings validation.
//!
//! Every check runs, whether or not an earlier one failed, and problems are
//! reported in a fixed order:
//!
//! 1. board dimensions
//! 2. start point on the board
//! 3. exit point on the board
//! 4. mines on the board
//! 5. no mine on the start point
//! 6. no mine on the exit point
//! 7. start and exit differ
//!
//! Callers (and the CLI output) depend on that order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, GameSettings, Position};

/// A configuration problem found by [`validate`].
///
/// Variants are declared in reporting order; `Display` yields the exact
/// user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Problem {
    /// Zero columns or zero rows.
    InvalidBoard,
    /// Start point is off the board.
    StartOutsideBoard,
    /// Exit point is off the board.
    ExitOutsideBoard,
    /// At least one mine is off the board.
    MineOutsideBoard,
    /// A mine shares the start tile.
    MineOnStart,
    /// A mine shares the exit tile.
    MineOnExit,
    /// Start and exit are the same tile.
    StartIsExit,
}

impl Problem {
    /// The user-facing message for this problem.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Problem::InvalidBoard => "Game board has invalid rows / columns.",
            Problem::StartOutsideBoard => "Starting point is not valid for the game board.",
            Problem::ExitOutsideBoard => "Exit point is not valid for the game board.",
            Problem::MineOutsideBoard => "Mine(s) are outside the game board.",
            Problem::MineOnStart => "A mine is on the start location.",
            Problem::MineOnExit => "A mine is on the exit location.",
            Problem::StartIsExit => "Start and Exit locations can not be the same.",
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Problems found in one settings value. At most one of each kind.
pub type Problems = SmallVec<[Problem; 7]>;

/// Check settings for internal consistency.
///
/// Returns an empty list when the settings are playable.
///
/// ```
/// use turtle_challenge::core::{Board, Direction, GameSettings, Position};
/// use turtle_challenge::rules::{validate, Problem};
///
/// let settings = GameSettings::new(
///     Board::new(1, 1),
///     Position::new(0, 0),
///     Position::new(0, 0),
///     Direction::North,
/// );
///
/// assert_eq!(validate(&settings).as_slice(), &[Problem::StartIsExit]);
/// ```
#[must_use]
pub fn validate(settings: &GameSettings) -> Problems {
    let board = settings.board;
    let mut problems = Problems::new();

    if !board.is_valid() {
        problems.push(Problem::InvalidBoard);
    }
    if !board.contains(settings.start) {
        problems.push(Problem::StartOutsideBoard);
    }
    if !board.contains(settings.exit) {
        problems.push(Problem::ExitOutsideBoard);
    }
    if !mines_on_board(board, &settings.mines) {
        problems.push(Problem::MineOutsideBoard);
    }
    if settings.is_mine(settings.start) {
        problems.push(Problem::MineOnStart);
    }
    if settings.is_mine(settings.exit) {
        problems.push(Problem::MineOnExit);
    }
    if settings.start == settings.exit {
        problems.push(Problem::StartIsExit);
    }

    problems
}

fn mines_on_board(board: Board, mines: &[Position]) -> bool {
    mines.iter().all(|&mine| board.contains(mine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn settings(board: Board, start: Position, exit: Position) -> GameSettings {
        GameSettings::new(board, start, exit, Direction::North)
    }

    #[test]
    fn test_valid_settings_have_no_problems() {
        let s = settings(Board::new(5, 5), Position::new(0, 0), Position::new(4, 4))
            .with_mine(Position::new(2, 2));
        assert!(validate(&s).is_empty());
    }

    #[test]
    fn test_problem_order_matches_declaration_order() {
        let mut sorted = vec![
            Problem::StartIsExit,
            Problem::InvalidBoard,
            Problem::MineOnExit,
            Problem::StartOutsideBoard,
        ];
        sorted.sort();
        assert_eq!(
            sorted,
            vec![
                Problem::InvalidBoard,
                Problem::StartOutsideBoard,
                Problem::MineOnExit,
                Problem::StartIsExit,
            ]
        );
    }

    #[test]
    fn test_empty_mine_list_is_on_board() {
        assert!(mines_on_board(Board::new(0, 0), &[]));
    }

    #[test]
    fn test_every_check_runs() {
        // Zero-sized board: everything is off it, start is also the exit,
        // and the single mine sits on both.
        let s = settings(Board::new(0, 0), Position::new(0, 0), Position::new(0, 0))
            .with_mine(Position::new(0, 0));

        assert_eq!(
            validate(&s).as_slice(),
            &[
                Problem::InvalidBoard,
                Problem::StartOutsideBoard,
                Problem::ExitOutsideBoard,
                Problem::MineOutsideBoard,
                Problem::MineOnStart,
                Problem::MineOnExit,
                Problem::StartIsExit,
            ]
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Problem::MineOutsideBoard.to_string(),
            "Mine(s) are outside the game board."
        );
        assert_eq!(
            Problem::InvalidBoard.to_string(),
            "Game board has invalid rows / columns."
        );
    }
}
