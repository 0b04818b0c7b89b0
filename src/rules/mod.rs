//! Game rules: settings validation, step resolution, rotation.
//!
//! All three are pure functions over `core` values. The engine composes
//! them; nothing here holds state.

pub mod resolver;
pub mod rotator;
pub mod validator;

pub use resolver::{step, Step};
pub use rotator::turn_right_90;
pub use validator::{validate, Problem, Problems};
