//! Simulation engine: turtle state, sequence replay, game entry points.
//!
//! ## Flow
//!
//! 1. [`play`] / [`start`] validate the settings once.
//! 2. A [`Simulation`] replays each sequence from a fresh [`Turtle`].
//! 3. Each replay ends in an [`Outcome`]; all of them form a [`GameReport`].
//!
//! Sequences are independent of each other. With the `parallel` feature they
//! are replayed on the rayon thread pool; outcomes keep input order either way.

mod game;
mod outcome;
mod simulation;
mod turtle;

pub use game::{play, play_with, start, GameManager};
pub use outcome::{GameReport, Outcome, SequenceOutcome};
pub use simulation::Simulation;
pub use turtle::Turtle;
