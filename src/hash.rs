//! Zobrist hashing of board positions.
//!
//! Every (cell, marble kind) pair gets an independent random 32-bit key. The
//! hash of a board is the XOR of the keys of its occupied cells, so moving a
//! marble updates the hash with two XORs:
//!
//! ```text
//! hash' = hash ^ key[from][kind] ^ key[to][kind]
//! ```
//!
//! Distinct boards may collide; with 32-bit keys that is rare enough to accept.

use crate::core::{Board, GameRng, Marble, Position, BOARD_SIZE};

/// Hash of a board position.
pub type BoardHash = u32;

/// Number of non-empty marble kinds.
const KINDS: usize = 3;

/// Key slot for a marble kind. Empty cells contribute nothing.
const fn kind_index(marble: Marble) -> Option<usize> {
    match marble {
        Marble::Black => Some(0),
        Marble::White => Some(1),
        Marble::Red => Some(2),
        Marble::Empty => None,
    }
}

/// Random keys for every (row, col, kind) triple. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashTable {
    keys: [[[u32; KINDS]; BOARD_SIZE]; BOARD_SIZE],
}

impl HashTable {
    /// Draw a fresh table from `rng`, row-major, one key per kind per cell.
    #[must_use]
    pub fn build(rng: &mut GameRng) -> Self {
        let mut keys = [[[0u32; KINDS]; BOARD_SIZE]; BOARD_SIZE];
        for cell in keys.iter_mut().flatten() {
            for key in cell.iter_mut() {
                *key = rng.next_key();
            }
        }
        Self { keys }
    }

    /// Key contributed by `marble` sitting at `pos`.
    ///
    /// Zero for empty marbles and off-board positions, so XOR-ing it in is a
    /// no-op there.
    #[must_use]
    pub fn key(&self, pos: Position, marble: Marble) -> BoardHash {
        match (pos.cell(), kind_index(marble)) {
            (Some((row, col)), Some(kind)) => self.keys[row][col][kind],
            _ => 0,
        }
    }

    /// Full recomputation over the board.
    #[must_use]
    pub fn hash_board(&self, board: &Board) -> BoardHash {
        Position::all().fold(0, |hash, pos| hash ^ self.key(pos, board.get(pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_table() {
        let a = HashTable::build(&mut GameRng::new(3));
        let b = HashTable::build(&mut GameRng::new(3));
        assert_eq!(a, b);

        let c = HashTable::build(&mut GameRng::new(4));
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_and_off_board_keys_are_zero() {
        let table = HashTable::build(&mut GameRng::new(1));
        assert_eq!(table.key(Position::new(2, 2), Marble::Empty), 0);
        assert_eq!(table.key(Position::new(-1, 2), Marble::Red), 0);
        assert_eq!(table.hash_board(&Board::empty()), 0);
    }

    #[test]
    fn test_identical_boards_hash_identically() {
        let table = HashTable::build(&mut GameRng::new(1));
        assert_eq!(table.hash_board(&Board::initial()), table.hash_board(&Board::initial()));
    }

    #[test]
    fn test_incremental_update_matches_recompute() {
        let table = HashTable::build(&mut GameRng::new(9));
        let mut board = Board::initial();
        let from = Position::new(0, 1);
        let to = Position::new(0, 2);

        let before = table.hash_board(&board);
        let incremental = before ^ table.key(from, Marble::White) ^ table.key(to, Marble::White);

        board.set(from, Marble::Empty);
        board.set(to, Marble::White);
        assert_eq!(table.hash_board(&board), incremental);
        assert_ne!(before, incremental);
    }
}
