//! Core domain types: board geometry, headings, moves, settings.
//!
//! These are plain values. They carry no game logic beyond simple queries;
//! validation lives in `rules` and replay lives in `engine`.

pub mod direction;
pub mod geometry;
pub mod moves;
pub mod settings;

pub use direction::{Direction, UnknownName};
pub use geometry::{Board, Position};
pub use moves::{Move, Sequence};
pub use settings::GameSettings;
