//! Core types: geometry, marbles, board, players, RNG, configuration.
//!
//! These are plain value types with no rule logic. The move engine in
//! [`crate::rules`] and the session in [`crate::session`] build on them.

pub mod geometry;
pub mod marble;
pub mod board;
pub mod player;
pub mod rng;
pub mod config;

pub use geometry::{Direction, ParseDirectionError, Position, BOARD_SIZE};
pub use marble::{Color, Marble, MarbleCounts};
pub use board::{Board, INITIAL_LAYOUT};
pub use player::{ColorMap, PlayerRecord};
pub use rng::GameRng;
pub use config::{ConfigError, PlayerSpec, SessionConfig};
