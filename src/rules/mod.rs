//! Move rules.
//!
//! - Series: which marbles a push moves
//! - Validation: the ordered legality checks
//! - Simulation: the post-move hash, computed without touching the board
//! - Application: the in-place board update
//!
//! Nothing here tracks turns or captures; [`crate::session`] owns that.

pub mod engine;
pub mod error;

pub use engine::{apply, Move, MoveEngine, PlannedMove, RuleState, Series};
pub use error::{IllegalMove, MoveError};
