//! Forward-step resolution.
//!
//! One rule per heading decides whether a single step stays on the board:
//!
//! | Heading | Legal when          | Effect  |
//! |---------|---------------------|---------|
//! | North   | `y > 0`             | `y - 1` |
//! | South   | `y < rows - 1`      | `y + 1` |
//! | East    | `x < columns - 1`   | `x + 1` |
//! | West    | `x > 0`             | `x - 1` |
//!
//! An illegal step leaves the position unchanged.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Direction, Position};

/// Result of attempting one forward step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Position after the attempt. Unchanged when `moved` is false.
    pub position: Position,
    /// Whether the turtle actually moved.
    pub moved: bool,
}

impl Step {
    const fn moved(position: Position) -> Self {
        Self {
            position,
            moved: true,
        }
    }

    const fn blocked(position: Position) -> Self {
        Self {
            position,
            moved: false,
        }
    }
}

/// Attempt one step from `position` along `direction`.
///
/// ```
/// use turtle_challenge::core::{Board, Direction, Position};
/// use turtle_challenge::rules::step;
///
/// let board = Board::new(3, 3);
///
/// let forward = step(board, Position::new(1, 1), Direction::North);
/// assert!(forward.moved);
/// assert_eq!(forward.position, Position::new(1, 0));
///
/// let blocked = step(board, Position::new(1, 0), Direction::North);
/// assert!(!blocked.moved);
/// assert_eq!(blocked.position, Position::new(1, 0));
/// ```
#[must_use]
pub fn step(board: Board, position: Position, direction: Direction) -> Step {
    let Position { x, y } = position;
    match direction {
        Direction::North if y > 0 => Step::moved(Position::new(x, y - 1)),
        Direction::South if y.saturating_add(1) < board.rows => Step::moved(Position::new(x, y + 1)),
        Direction::East if x.saturating_add(1) < board.columns => Step::moved(Position::new(x + 1, y)),
        Direction::West if x > 0 => Step::moved(Position::new(x - 1, y)),
        _ => Step::blocked(position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: Board = Board::new(5, 4);

    #[test]
    fn test_each_heading_moves_one_tile() {
        let centre = Position::new(2, 2);
        assert_eq!(step(BOARD, centre, Direction::North).position, Position::new(2, 1));
        assert_eq!(step(BOARD, centre, Direction::South).position, Position::new(2, 3));
        assert_eq!(step(BOARD, centre, Direction::East).position, Position::new(3, 2));
        assert_eq!(step(BOARD, centre, Direction::West).position, Position::new(1, 2));
    }

    #[test]
    fn test_edges_block() {
        let cases = [
            (Position::new(2, 0), Direction::North),
            (Position::new(2, 3), Direction::South),
            (Position::new(4, 1), Direction::East),
            (Position::new(0, 1), Direction::West),
        ];
        for (position, direction) in cases {
            let result = step(BOARD, position, direction);
            assert!(!result.moved, "{direction} from {position} should be blocked");
            assert_eq!(result.position, position);
        }
    }

    #[test]
    fn test_single_tile_board_blocks_everything() {
        let board = Board::new(1, 1);
        for direction in Direction::ALL {
            assert!(!step(board, Position::new(0, 0), direction).moved);
        }
    }

    #[test]
    fn test_position_off_board_does_not_overflow() {
        // Validation rejects these, but the rule itself must stay total.
        let far = Position::new(u32::MAX, u32::MAX);
        assert!(!step(BOARD, far, Direction::South).moved);
        assert!(!step(BOARD, far, Direction::East).moved);
    }
}
