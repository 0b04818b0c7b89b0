//! Sequence replay.
//!
//! Each sequence starts from a fresh turtle at the configured start point and
//! heading. Moves are played in order:
//!
//! - `Turn` rotates the turtle clockwise.
//! - `StepForward` attempts a step, then checks the turtle's tile: a mine ends
//!   the sequence with `MineHit`, otherwise the exit ends it with `Success`.
//!
//! A step blocked by the board edge is not an outcome of its own. The turtle
//! stays where it is and the mine/exit checks still run on that tile.
//! Sequences that run out of moves end with `StillInDanger`.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::{Outcome, SequenceOutcome, Turtle};
use crate::core::{GameSettings, Move, Position, Sequence};

/// Replays sequences against one set of settings.
///
/// The settings are borrowed read-only and mine lookups are precomputed, so
/// one `Simulation` can replay any number of sequences.
///
/// ## Example
///
/// ```
/// use turtle_challenge::core::{Board, Direction, GameSettings, Position, Sequence};
/// use turtle_challenge::engine::{Outcome, Simulation};
///
/// let settings = GameSettings::new(
///     Board::new(3, 3),
///     Position::new(0, 0),
///     Position::new(2, 0),
///     Direction::East,
/// );
/// let simulation = Simulation::new(&settings);
///
/// let result = simulation.run_sequence(&Sequence::new("straight").step().step());
/// assert_eq!(result.outcome, Outcome::Success);
/// assert_eq!(result.to_string(), "straight: Success!");
/// ```
#[derive(Clone, Debug)]
pub struct Simulation<'a> {
    settings: &'a GameSettings,
    mines: FxHashSet<Position>,
}

impl<'a> Simulation<'a> {
    /// Prepare a simulation.
    ///
    /// Settings are expected to have passed validation; replay itself never
    /// panics on inconsistent settings, but outcomes are then meaningless.
    #[must_use]
    pub fn new(settings: &'a GameSettings) -> Self {
        Self {
            settings,
            mines: settings.mines.iter().copied().collect(),
        }
    }

    /// The settings being played.
    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        self.settings
    }

    /// Replay one sequence from the starting state.
    #[must_use]
    pub fn run_sequence(&self, sequence: &Sequence) -> SequenceOutcome {
        let mut turtle = Turtle::at_start(self.settings);

        for (index, mv) in sequence.moves.iter().enumerate() {
            match mv {
                Move::Turn => {
                    turtle = turtle.turned();
                    trace!(sequence = %sequence.name, direction = %turtle.direction, "turned");
                }
                Move::StepForward => {
                    let (next, moved) = turtle.stepped(self.settings.board);
                    turtle = next;
                    if moved {
                        trace!(sequence = %sequence.name, position = %turtle.position, "stepped");
                    } else {
                        trace!(
                            sequence = %sequence.name,
                            position = %turtle.position,
                            direction = %turtle.direction,
                            "border hit, turtle stays in place"
                        );
                    }

                    if let Some(outcome) = self.tile_outcome(turtle.position) {
                        return self.finish(sequence, outcome, turtle, index + 1);
                    }
                }
            }
        }

        self.finish(sequence, Outcome::StillInDanger, turtle, sequence.moves.len())
    }

    /// Replay every sequence, returning outcomes in input order.
    #[must_use]
    pub fn run(&self, sequences: &[Sequence]) -> Vec<SequenceOutcome> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            sequences
                .par_iter()
                .map(|sequence| self.run_sequence(sequence))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            sequences
                .iter()
                .map(|sequence| self.run_sequence(sequence))
                .collect()
        }
    }

    /// Outcome of standing on `position`, if it ends the sequence.
    ///
    /// Mines are checked before the exit.
    fn tile_outcome(&self, position: Position) -> Option<Outcome> {
        if self.mines.contains(&position) {
            Some(Outcome::MineHit)
        } else if position == self.settings.exit {
            Some(Outcome::Success)
        } else {
            None
        }
    }

    fn finish(
        &self,
        sequence: &Sequence,
        outcome: Outcome,
        turtle: Turtle,
        moves_played: usize,
    ) -> SequenceOutcome {
        debug!(
            sequence = %sequence.name,
            %outcome,
            position = %turtle.position,
            moves_played,
            total_moves = sequence.moves.len(),
            "sequence finished"
        );
        SequenceOutcome {
            name: sequence.name.clone(),
            outcome,
            turtle,
            moves_played,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Direction};

    fn settings() -> GameSettings {
        GameSettings::new(
            Board::new(5, 5),
            Position::new(0, 0),
            Position::new(4, 4),
            Direction::South,
        )
        .with_mines([Position::new(0, 2), Position::new(3, 1)])
    }

    #[test]
    fn test_empty_sequence_is_still_in_danger() {
        let settings = settings();
        let result = Simulation::new(&settings).run_sequence(&Sequence::new("idle"));
        assert_eq!(result.outcome, Outcome::StillInDanger);
        assert_eq!(result.moves_played, 0);
        assert_eq!(result.turtle, Turtle::at_start(&settings));
    }

    #[test]
    fn test_mine_stops_replay() {
        let settings = settings();
        // Two steps south lands on (0, 2); the remaining moves are skipped.
        let sequence = Sequence::new("boom").step().step().step().turn();
        let result = Simulation::new(&settings).run_sequence(&sequence);

        assert_eq!(result.outcome, Outcome::MineHit);
        assert_eq!(result.moves_played, 2);
        assert_eq!(result.turtle.position, Position::new(0, 2));
    }

    #[test]
    fn test_turns_alone_never_end_a_sequence() {
        let settings = settings();
        let sequence = Sequence::new("spin").turn().turn().turn().turn().turn();
        let result = Simulation::new(&settings).run_sequence(&sequence);

        assert_eq!(result.outcome, Outcome::StillInDanger);
        assert_eq!(result.moves_played, 5);
        assert_eq!(result.turtle.direction, Direction::West);
    }

    #[test]
    fn test_mine_checked_before_exit() {
        // Inconsistent on purpose: validation would reject a mine on the exit.
        let settings = GameSettings::new(
            Board::new(2, 1),
            Position::new(0, 0),
            Position::new(1, 0),
            Direction::East,
        )
        .with_mine(Position::new(1, 0));

        let result = Simulation::new(&settings).run_sequence(&Sequence::new("s").step());
        assert_eq!(result.outcome, Outcome::MineHit);
    }

    #[test]
    fn test_run_keeps_input_order() {
        let settings = settings();
        let sequences = vec![
            Sequence::new("first").step().step(),
            Sequence::new("second"),
            Sequence::new("third").turn().turn().turn().step(),
        ];
        let names: Vec<_> = Simulation::new(&settings)
            .run(&sequences)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
