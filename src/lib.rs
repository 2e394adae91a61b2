//! # kuba-engine
//!
//! Rules engine for Kuba, a two-player marble-pushing game on a 7×7 board.
//!
//! ## Rules in brief
//!
//! - Each player owns eight marbles of their color; thirteen red marbles sit
//!   in the middle.
//! - A move pushes one of your marbles, and the whole line ahead of it, one
//!   cell. You may only push from the open end of a line.
//! - Marbles pushed past the edge leave the board. Pushing off a red marble
//!   captures it; pushing off your own marble is not allowed.
//! - A move may not recreate the position from before the opponent's last
//!   move (checked with Zobrist hashes).
//! - You win by capturing seven red marbles or clearing a kind of marble off
//!   the board.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, marbles, board, players, RNG, configuration
//! - `hash`: Zobrist keys and board hashing
//! - `rules`: Push series, legality checks, simulation, application
//! - `session`: Turn order, captures, win detection, public move API

pub mod core;
pub mod hash;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Color, ConfigError, Direction, GameRng, Marble, MarbleCounts, PlayerRecord, PlayerSpec, Position,
    SessionConfig,
};

pub use crate::hash::{BoardHash, HashTable};

pub use crate::rules::{IllegalMove, Move, MoveEngine, MoveError, Series};

pub use crate::session::{GameSession, MoveCheck, MoveOutcome, CAPTURE_TARGET};
