//! Runtime turtle state.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Direction, GameSettings, Position};
use crate::rules::{self, Step};

/// Where the turtle is and which way it faces.
///
/// A `Copy` value: each move produces a new turtle rather than mutating a
/// shared one, so nothing can leak from one sequence into the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turtle {
    /// Current tile.
    pub position: Position,
    /// Current heading.
    pub direction: Direction,
}

impl Turtle {
    /// Create a turtle at `position` facing `direction`.
    #[must_use]
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// The turtle every sequence starts from.
    #[must_use]
    pub fn at_start(settings: &GameSettings) -> Self {
        Self::new(settings.start, settings.direction)
    }

    /// This turtle rotated 90 degrees clockwise.
    #[must_use]
    pub const fn turned(self) -> Self {
        Self::new(self.position, rules::turn_right_90(self.direction))
    }

    /// Attempt one step forward.
    ///
    /// Returns the resulting turtle and whether it moved. A blocked step
    /// returns `self` unchanged.
    #[must_use]
    pub fn stepped(self, board: Board) -> (Self, bool) {
        let Step { position, moved } = rules::step(board, self.position, self.direction);
        (Self::new(position, self.direction), moved)
    }
}
