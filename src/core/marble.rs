//! Marble kinds and player colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marble {
    #[default]
    Empty,
    /// Neutral marble. Pushing one off the board is a capture.
    Red,
    White,
    Black,
}

impl Marble {
    /// Board notation: `X`, `R`, `W`, `B`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Marble::Empty => 'X',
            Marble::Red => 'R',
            Marble::White => 'W',
            Marble::Black => 'B',
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Marble::Empty),
            'R' => Some(Marble::Red),
            'W' => Some(Marble::White),
            'B' => Some(Marble::Black),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Marble::Empty)
    }

    /// The player color this marble belongs to, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Marble::White => Some(Color::White),
            Marble::Black => Some(Color::Black),
            Marble::Empty | Marble::Red => None,
        }
    }
}

impl fmt::Display for Marble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the two player colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl From<Color> for Marble {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Marble::White,
            Color::Black => Marble::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Number of marbles of each kind on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarbleCounts {
    pub white: u32,
    pub black: u32,
    pub red: u32,
}

impl MarbleCounts {
    /// Count for a player color.
    #[must_use]
    pub const fn of(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.white + self.black + self.red
    }

    /// True if any of the three kinds has been wiped off the board.
    #[must_use]
    pub const fn any_exhausted(&self) -> bool {
        self.white == 0 || self.black == 0 || self.red == 0
    }

    pub(crate) fn record(&mut self, marble: Marble) {
        match marble {
            Marble::White => self.white += 1,
            Marble::Black => self.black += 1,
            Marble::Red => self.red += 1,
            Marble::Empty => {}
        }
    }
}
