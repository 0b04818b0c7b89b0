//! Heading rotation.

use crate::core::Direction;

/// Rotate a heading 90 degrees clockwise.
///
/// Computed as `(index + 1) mod 4` over the fixed heading encoding, so four
/// turns always bring the turtle back to where it started facing.
///
/// ```
/// use turtle_challenge::core::Direction;
/// use turtle_challenge::rules::turn_right_90;
///
/// assert_eq!(turn_right_90(Direction::West), Direction::North);
/// ```
#[must_use]
pub const fn turn_right_90(direction: Direction) -> Direction {
    match Direction::from_index((direction.index() + 1) % 4) {
        Some(next) => next,
        // `% 4` keeps the index inside the encoding.
        None => unreachable!(),
    }
}
