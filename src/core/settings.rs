//! Game settings.
//!
//! `GameSettings` describes one game: the board, where the turtle starts and
//! which way it faces, where the exit is, and where the mines are.
//!
//! Settings are plain data. Nothing here rejects inconsistent values (a start
//! point off the board, a mine on the exit, ...); that is the job of
//! [`crate::rules::validate`], which reports every problem at once.

use serde::{Deserialize, Serialize};

use super::{Board, Direction, Position};

/// Complete configuration of a single game.
///
/// ## Example
///
/// ```
/// use turtle_challenge::core::{Board, Direction, GameSettings, Position};
///
/// let settings = GameSettings::new(
///     Board::new(5, 5),
///     Position::new(0, 0),
///     Position::new(4, 4),
///     Direction::East,
/// )
/// .with_mine(Position::new(1, 1))
/// .with_mine(Position::new(3, 2));
///
/// assert_eq!(settings.mines.len(), 2);
/// assert!(settings.is_mine(Position::new(1, 1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Board bounds.
    pub board: Board,

    /// Where every sequence starts.
    pub start: Position,

    /// Reaching this tile ends a sequence successfully.
    pub exit: Position,

    /// Initial heading of the turtle.
    pub direction: Direction,

    /// Mine locations, in file order.
    #[serde(default)]
    pub mines: Vec<Position>,
}

impl GameSettings {
    /// Create settings with no mines.
    #[must_use]
    pub fn new(board: Board, start: Position, exit: Position, direction: Direction) -> Self {
        Self {
            board,
            start,
            exit,
            direction,
            mines: Vec::new(),
        }
    }

    /// Add a mine.
    #[must_use]
    pub fn with_mine(mut self, mine: Position) -> Self {
        self.mines.push(mine);
        self
    }

    /// Add several mines.
    #[must_use]
    pub fn with_mines(mut self, mines: impl IntoIterator<Item = Position>) -> Self {
        self.mines.extend(mines);
        self
    }

    /// Check whether a mine sits on `position`.
    ///
    /// Linear scan; the engine builds a hash set once per run instead.
    #[must_use]
    pub fn is_mine(&self, position: Position) -> bool {
        self.mines.contains(&position)
    }
}
