//! # turtle-challenge
//!
//! A turtle crosses a minefield. Given a board, a start point and heading, an
//! exit and a set of mines, each scripted sequence of moves is replayed and
//! ends in one of three ways: the turtle hits a mine, reaches the exit, or is
//! still in danger when the moves run out.
//!
//! ## Design Principles
//!
//! 1. **Validate Once**: settings are checked up front and every problem is
//!    reported, in a fixed order. Invalid settings never reach the engine.
//!
//! 2. **Pure Replay**: the engine borrows settings read-only and threads a
//!    `Copy` turtle through each sequence. No state survives between
//!    sequences or between runs.
//!
//! 3. **I/O at the Edge**: file formats live in `data`, behind a provider
//!    registry keyed by extension. The engine only sees domain values.
//!
//! ## Modules
//!
//! - `core`: board, positions, headings, moves, sequences, settings
//! - `rules`: settings validation, step resolution, rotation
//! - `engine`: turtle state, sequence replay, outcomes, game entry points
//! - `data`: JSON/XML providers, provider registry, file loading
//!
//! ## Example
//!
//! ```
//! use turtle_challenge::{start, Board, Direction, GameSettings, Position, Sequence};
//!
//! let settings = GameSettings::new(
//!     Board::new(4, 4),
//!     Position::new(0, 0),
//!     Position::new(3, 0),
//!     Direction::East,
//! )
//! .with_mine(Position::new(0, 1));
//!
//! let sequences = [
//!     Sequence::new("straight").step().step().step(),
//!     Sequence::new("south").turn().step(),
//!     Sequence::new("short").step(),
//! ];
//!
//! assert_eq!(
//!     start(&settings, &sequences),
//!     vec!["straight: Success!", "south: Mine hit!", "short: Still in danger!"]
//! );
//! ```

pub mod core;
pub mod data;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, Direction, GameSettings, Move, Position, Sequence};

pub use crate::rules::{step, turn_right_90, validate, Problem, Problems, Step};

pub use crate::engine::{
    play, play_with, start, GameManager, GameReport, Outcome, SequenceOutcome, Simulation, Turtle,
};

pub use crate::data::{
    DataError, DataProvider, DiskFileAccess, FileAccess, FormatError, GameDataManager,
    JsonProvider, ProviderRegistry, XmlProvider,
};
