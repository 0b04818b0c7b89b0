//! Sequence outcomes and game reports.

use serde::{Deserialize, Serialize};

use super::Turtle;
use crate::rules::Problem;

/// Terminal state of one replayed sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The turtle landed on a mine.
    MineHit,
    /// The turtle reached the exit.
    Success,
    /// Moves ran out with the turtle on neither a mine nor the exit.
    StillInDanger,
}

impl Outcome {
    /// Suffix used in the outcome line.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::MineHit => "Mine hit!",
            Outcome::Success => "Success!",
            Outcome::StillInDanger => "Still in danger!",
        }
    }

    /// Whether this outcome ends a sequence as soon as it happens.
    ///
    /// `StillInDanger` only happens once every move has been played.
    #[must_use]
    pub const fn stops_early(self) -> bool {
        matches!(self, Outcome::MineHit | Outcome::Success)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of one named sequence.
///
/// Displays as `"<name>: <outcome>"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceOutcome {
    /// Name of the sequence.
    pub name: String,
    /// How it ended.
    pub outcome: Outcome,
    /// Turtle state when the sequence ended.
    pub turtle: Turtle,
    /// Number of moves played, including the one that ended the sequence.
    pub moves_played: usize,
}

impl std::fmt::Display for SequenceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.outcome)
    }
}

/// Everything one run of the game produced.
///
/// Either the settings were rejected (and no sequence ran), or every
/// sequence was replayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameReport {
    /// Settings failed validation, in check order.
    Invalid(Vec<Problem>),
    /// One outcome per sequence, in input order.
    Completed(Vec<SequenceOutcome>),
}

impl GameReport {
    /// Check if the settings were rejected.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, GameReport::Invalid(_))
    }

    /// Flatten into the printable lines: problem messages or outcome lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        match self {
            GameReport::Invalid(problems) => problems.iter().map(ToString::to_string).collect(),
            GameReport::Completed(outcomes) => outcomes.iter().map(ToString::to_string).collect(),
        }
    }
}
