//! Push mechanics: series computation, validation, simulation, application.
//!
//! A move names the marble to push and a direction. Everything in the line
//! ahead of it, up to the first gap or the board edge, moves one cell along;
//! whatever is pushed past the edge leaves the board.
//!
//! Validation and simulation only read the board. [`apply`] is the single
//! mutation point and is called once a move has fully validated.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::IllegalMove;
use crate::core::{Board, Color, Direction, Marble, Position, BOARD_SIZE};
use crate::hash::{BoardHash, HashTable};

/// Positions of the marbles a push moves, frontmost first, pushed marble last.
///
/// At most one full row or column, so it never spills to the heap.
pub type Series = SmallVec<[Position; BOARD_SIZE]>;

/// A push request: the marble at `pos` is pushed toward `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub pos: Position,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub fn new(pos: impl Into<Position>, direction: Direction) -> Self {
        Self {
            pos: pos.into(),
            direction,
        }
    }
}

/// Session state that move legality depends on besides the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleState {
    pub winner: Option<Color>,
    /// Player to move, `None` before the first move.
    pub to_move: Option<Color>,
    pub current_hash: BoardHash,
    /// Hash of the position before the most recent move.
    pub previous_hash: BoardHash,
}

/// A validated move, ready to commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedMove {
    pub mv: Move,
    pub series: Series,
    /// Board hash after the move is applied.
    pub new_hash: BoardHash,
}

/// Read-only view of a board and its hash keys.
#[derive(Clone, Copy, Debug)]
pub struct MoveEngine<'a> {
    board: &'a Board,
    table: &'a HashTable,
}

impl<'a> MoveEngine<'a> {
    #[must_use]
    pub fn new(board: &'a Board, table: &'a HashTable) -> Self {
        Self { board, table }
    }

    /// The contiguous run of marbles starting at `mv.pos` along the push
    /// direction, frontmost first. Empty if `mv.pos` holds no marble.
    #[must_use]
    pub fn series(&self, mv: Move) -> Series {
        let mut series = Series::new();
        let mut pos = mv.pos;
        while !self.board.get(pos).is_empty() {
            series.push(pos);
            pos = pos.step(mv.direction);
        }
        series.reverse();
        series
    }

    /// Hash of the board after pushing `series` one step along `direction`.
    ///
    /// Mirrors [`apply`] exactly: each marble leaves its cell, and enters the
    /// next one unless that lies off the board.
    #[must_use]
    pub fn simulate(&self, series: &[Position], direction: Direction, current_hash: BoardHash) -> BoardHash {
        series.iter().fold(current_hash, |hash, &pos| {
            let marble = self.board.get(pos);
            hash ^ self.table.key(pos, marble) ^ self.table.key(pos.step(direction), marble)
        })
    }

    /// Run the ordered legality checks for `mover` pushing along `mv`.
    ///
    /// Returns the post-move hash on success.
    pub fn validate(
        &self,
        state: &RuleState,
        mover: Color,
        mv: Move,
        series: &[Position],
    ) -> Result<BoardHash, IllegalMove> {
        if state.winner.is_some() {
            return Err(IllegalMove::GameOver);
        }
        if state.to_move.is_some_and(|color| color != mover) {
            return Err(IllegalMove::WrongTurn);
        }

        let pushed = self.board.get(mv.pos);
        if pushed != Marble::from(mover) {
            return Err(IllegalMove::WrongPiece);
        }
        if !self.board.get(mv.pos.step_back(mv.direction)).is_empty() {
            return Err(IllegalMove::InvalidDirection);
        }

        let front = *series.first().ok_or(IllegalMove::WrongPiece)?;
        if !front.step(mv.direction).in_bounds() && self.board.get(front) == pushed {
            return Err(IllegalMove::SelfElimination);
        }

        let new_hash = self.simulate(series, mv.direction, state.current_hash);
        if new_hash == state.previous_hash {
            return Err(IllegalMove::RepeatedPosition);
        }
        Ok(new_hash)
    }

    /// Compute the series and validate in one step.
    pub fn plan(&self, state: &RuleState, mover: Color, mv: Move) -> Result<PlannedMove, IllegalMove> {
        let series = self.series(mv);
        let new_hash = self.validate(state, mover, mv, &series)?;
        Ok(PlannedMove { mv, series, new_hash })
    }
}

/// Shift every marble in `series` one step along `direction`.
///
/// Front-first order means each write lands on a cell whose marble has
/// already moved on. The pushed marble's origin is cleared last since nothing
/// moves into it.
pub fn apply(board: &mut Board, series: &[Position], direction: Direction) {
    for &pos in series {
        let marble = board.get(pos);
        board.set(pos.step(direction), marble);
    }
    if let Some(&origin) = series.last() {
        board.set(origin, Marble::Empty);
    }
}
