//! Game sessions: turn order, captures, and win detection.
//!
//! A [`GameSession`] is the public face of the engine. It resolves player
//! names, runs the move rules, and on success updates turn, hashes,
//! capture tallies and the winner.
//!
//! ```
//! use kuba_engine::core::{Color, Direction};
//! use kuba_engine::session::GameSession;
//!
//! let mut game = GameSession::with_seed(("ann", Color::White), ("bo", Color::Black), 7).unwrap();
//! assert!(game.make_move("ann", (0, 0), Direction::Right));
//! assert_eq!(game.current_turn(), Some("bo"));
//! ```

mod game;
mod moves;

pub use game::{GameSession, MoveOutcome, CAPTURE_TARGET};
pub use moves::MoveCheck;
