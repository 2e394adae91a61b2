//! Move rejection reasons.

use serde::{Deserialize, Serialize};

/// Why a move was refused.
///
/// Checks run in declaration order; the first one that fails is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum IllegalMove {
    #[error("game over")]
    GameOver,

    #[error("wrong turn")]
    WrongTurn,

    /// Starting cell is empty, off the board, or not the mover's color.
    #[error("wrong piece")]
    WrongPiece,

    /// Pushing from the middle of a line.
    #[error("invalid direction")]
    InvalidDirection,

    #[error("cannot push off own marble")]
    SelfElimination,

    /// Would recreate the position from before the opponent's last move.
    #[error("cannot undo move")]
    RepeatedPosition,
}

/// Failure of a move request on a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),

    /// The caller named a player that was never registered.
    #[error("unknown player: {0:?}")]
    UnknownPlayer(String),
}

impl MoveError {
    /// The rule violation, if this was one.
    #[must_use]
    pub fn illegal(&self) -> Option<IllegalMove> {
        match self {
            MoveError::Illegal(reason) => Some(*reason),
            MoveError::UnknownPlayer(_) => None,
        }
    }
}
