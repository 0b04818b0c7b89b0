//! Board bounds and grid positions.
//!
//! ## Board
//!
//! A rectangle of `columns` × `rows` tiles. The coordinate space is
//! `[0, columns - 1] × [0, rows - 1]`, with `(0, 0)` in the north-west corner:
//! `y` grows towards the south and `x` grows towards the east.
//!
//! ## Position
//!
//! An unsigned `(x, y)` pair. Equality is coordinate-wise.

use serde::{Deserialize, Serialize};

/// Size of the rectangular game board.
///
/// A board is only usable when both dimensions are non-zero. Construction
/// does not enforce this; see [`Board::is_valid`] and the settings validator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Number of columns (width, along `x`).
    pub columns: u32,
    /// Number of rows (height, along `y`).
    pub rows: u32,
}

impl Board {
    /// Create a new board.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Check that the board has at least one column and one row.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.columns > 0 && self.rows > 0
    }

    /// Check whether a position lies inside the board.
    ///
    /// ```
    /// use turtle_challenge::core::{Board, Position};
    ///
    /// let board = Board::new(5, 4);
    /// assert!(board.contains(Position::new(4, 3)));
    /// assert!(!board.contains(Position::new(5, 0)));
    /// assert!(!board.contains(Position::new(0, 4)));
    /// ```
    #[must_use]
    pub const fn contains(self, position: Position) -> bool {
        position.x < self.columns && position.y < self.rows
    }

    /// Total number of tiles.
    #[must_use]
    pub const fn area(self) -> u64 {
        self.columns as u64 * self.rows as u64
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// A tile on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Position {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
