//! Board geometry: positions and push directions.
//!
//! Positions are signed so that a marble pushed past the edge still has a
//! well-defined (off-board) coordinate during move computation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side length of the Kuba board.
pub const BOARD_SIZE: usize = 7;

/// A (row, col) pair. Row 0 is the top edge, col 0 the left edge.
///
/// Not required to be on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step along `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.vector();
        Self::new(self.row + dr, self.col + dc)
    }

    /// The neighbouring position one step against `direction`.
    #[must_use]
    pub const fn step_back(self, direction: Direction) -> Self {
        let (dr, dc) = direction.vector();
        Self::new(self.row - dr, self.col - dc)
    }

    /// True iff both coordinates lie in `[0, 6]`.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        let max = BOARD_SIZE as i32;
        self.row >= 0 && self.row < max && self.col >= 0 && self.col < max
    }

    /// Cell indices for an on-board position.
    #[must_use]
    pub(crate) fn cell(self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Iterate over every on-board position, row-major.
    pub fn all() -> impl Iterator<Item = Position> {
        let size = BOARD_SIZE as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Push direction, as seen from above the board.
///
/// `Forward` moves toward row 0, `Backward` toward row 6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Unit displacement as `(d_row, d_col)`.
    #[must_use]
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Single-letter notation: `L`, `R`, `F`, `B`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
        }
    }

    /// Parse single-letter notation (case-insensitive).
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            'F' => Some(Direction::Forward),
            'B' => Some(Direction::Backward),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returned when a direction symbol is not one of `L`, `R`, `F`, `B`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized direction symbol: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::from_symbol(c).ok_or_else(|| ParseDirectionError(s.to_string())),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
