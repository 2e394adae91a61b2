//! The 7×7 Kuba board.
//!
//! Reads outside the grid yield [`Marble::Empty`] and writes outside the grid
//! are dropped, so push computations can walk past the edge freely.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::geometry::{Position, BOARD_SIZE};
use super::marble::{Marble, MarbleCounts};

const X: Marble = Marble::Empty;
const R: Marble = Marble::Red;
const W: Marble = Marble::White;
const B: Marble = Marble::Black;

/// Standard starting position.
///
/// Eight marbles per player in opposing corners, thirteen red marbles in a
/// central diamond.
#[rustfmt::skip]
pub const INITIAL_LAYOUT: [[Marble; BOARD_SIZE]; BOARD_SIZE] = [
    [W, W, X, X, X, B, B],
    [W, W, X, R, X, B, B],
    [X, X, R, R, R, X, X],
    [X, R, R, R, R, R, X],
    [X, X, R, R, R, X, X],
    [B, B, X, R, X, W, W],
    [B, B, X, X, X, W, W],
];

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Marble; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Board in the standard starting position.
    #[must_use]
    pub fn initial() -> Self {
        Self::from_rows(INITIAL_LAYOUT)
    }

    /// Board with no marbles.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_rows([[Marble::Empty; BOARD_SIZE]; BOARD_SIZE])
    }

    #[must_use]
    pub fn from_rows(cells: [[Marble; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Raw grid snapshot, row 0 first.
    #[must_use]
    pub fn rows(&self) -> &[[Marble; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Marble {
        match pos.cell() {
            Some((row, col)) => self.cells[row][col],
            None => Marble::Empty,
        }
    }

    pub fn set(&mut self, pos: Position, marble: Marble) {
        if let Some((row, col)) = pos.cell() {
            self.cells[row][col] = marble;
        }
    }

    /// Full-board tally of each marble kind.
    #[must_use]
    pub fn counts(&self) -> MarbleCounts {
        let mut counts = MarbleCounts::default();
        for marble in self.cells.iter().flatten() {
            counts.record(*marble);
        }
        counts
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|m| m.symbol().to_string()).collect();
            writeln!(f, "{}", line.join("  "))?;
        }
        Ok(())
    }
}
