//! Compass headings.
//!
//! Headings follow a fixed clockwise order with a stable integer encoding:
//! `North = 0`, `East = 1`, `South = 2`, `West = 3`. Rotation arithmetic in
//! [`crate::rules::rotator`] relies on this encoding.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four headings the turtle can face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Towards row 0.
    #[default]
    North = 0,
    /// Towards the last column.
    East = 1,
    /// Towards the last row.
    South = 2,
    /// Towards column 0.
    West = 3,
}

impl Direction {
    /// All headings in clockwise order, starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Integer encoding of this heading (0..=3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Heading for an integer encoding, or `None` outside 0..=3.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Direction::North),
            1 => Some(Direction::East),
            2 => Some(Direction::South),
            3 => Some(Direction::West),
            _ => None,
        }
    }

    /// Canonical name of the heading.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A name in a game data file did not match any known value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownName {
    /// What was being parsed ("direction", "move").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl FromStr for Direction {
    type Err = UnknownName;

    /// Parse a heading name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownName::new("direction", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_index(direction.index()), Some(direction));
        }
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn test_encoding_is_fixed() {
        assert_eq!(Direction::North.index(), 0);
        assert_eq!(Direction::East.index(), 1);
        assert_eq!(Direction::South.index(), 2);
        assert_eq!(Direction::West.index(), 3);
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("west".parse::<Direction>(), Ok(Direction::West));
        assert_eq!("SOUTH".parse::<Direction>(), Ok(Direction::South));
        assert_eq!(" North ".parse::<Direction>(), Ok(Direction::North));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "up".parse::<Direction>().unwrap_err();
        assert_eq!(err.kind, "direction");
        assert_eq!(err.to_string(), "unknown direction `up`");
    }

    #[test]
    fn test_default_is_north() {
        assert_eq!(Direction::default(), Direction::North);
    }
}
