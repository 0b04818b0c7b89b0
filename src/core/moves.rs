//! Moves and named move sequences.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::direction::UnknownName;

/// A single scripted instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Advance one tile along the current heading.
    StepForward,
    /// Rotate 90 degrees clockwise in place.
    Turn,
}

impl Move {
    /// Name used in game data files.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Move::StepForward => "move",
            Move::Turn => "rotate",
        }
    }
}

impl FromStr for Move {
    type Err = UnknownName;

    /// Parse a data-file move name (`move` / `rotate`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [Move::StepForward, Move::Turn]
            .into_iter()
            .find(|m| m.wire_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownName::new("move", s))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A named, ordered list of moves.
///
/// Every sequence is replayed from the same starting state.
///
/// ## Example
///
/// ```
/// use turtle_challenge::core::{Move, Sequence};
///
/// let sequence = Sequence::new("Sequence 1").step().turn().step();
/// assert_eq!(sequence.moves, vec![Move::StepForward, Move::Turn, Move::StepForward]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Label echoed in the outcome line.
    pub name: String,
    /// Moves in replay order.
    pub moves: Vec<Move>,
}

impl Sequence {
    /// Create an empty sequence.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            moves: Vec::new(),
        }
    }

    /// Append a move.
    #[must_use]
    pub fn with_move(mut self, mv: Move) -> Self {
        self.moves.push(mv);
        self
    }

    /// Append several moves.
    #[must_use]
    pub fn with_moves(mut self, moves: impl IntoIterator<Item = Move>) -> Self {
        self.moves.extend(moves);
        self
    }

    /// Append a [`Move::StepForward`].
    #[must_use]
    pub fn step(self) -> Self {
        self.with_move(Move::StepForward)
    }

    /// Append a [`Move::Turn`].
    #[must_use]
    pub fn turn(self) -> Self {
        self.with_move(Move::Turn)
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the sequence has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
