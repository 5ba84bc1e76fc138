//! Zobrist hashing.
//!
//! Each `Engine` owns its own `ZobristTables`, freshly randomized at
//! construction, rather than sharing one process-wide lazily-seeded table
//! across every board. Two engines sharing a transposition table must be
//! constructed from the same seed; giving every engine its own table makes
//! that an explicit, opt-in sharing decision rather than an accident of
//! process-wide statics.

use rand::Rng;

use crate::gomoku::prelude::*;

/// Per-(color, cell) random constants, drawn once per engine.
#[derive(Clone, Debug)]
pub struct ZobristTables {
    black: [[u64; BOARD_SIZE]; BOARD_SIZE],
    white: [[u64; BOARD_SIZE]; BOARD_SIZE],
}

impl ZobristTables {
    /// Draws a fresh table from a uniform distribution over the 64-bit range.
    pub fn new_random() -> ZobristTables {
        let mut rng = rand::thread_rng();
        let mut black = [[0u64; BOARD_SIZE]; BOARD_SIZE];
        let mut white = [[0u64; BOARD_SIZE]; BOARD_SIZE];
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                black[x][y] = rng.gen();
                white[x][y] = rng.gen();
            }
        }
        ZobristTables { black, white }
    }

    fn value_for(&self, color: Stone, pos: Pos) -> u64 {
        match color {
            Stone::Black => self.black[pos.x][pos.y],
            Stone::White => self.white[pos.x][pos.y],
            Stone::Empty => 0,
        }
    }
}

/// A 15x15 matrix of per-cell Zobrist entries: 0 where empty, else the
/// table constant for whatever color occupies that cell.
#[derive(Clone, Copy, Debug)]
pub struct ZobristMatrix {
    cells: [[u64; BOARD_SIZE]; BOARD_SIZE],
}

impl ZobristMatrix {
    pub fn empty() -> ZobristMatrix {
        ZobristMatrix { cells: [[0; BOARD_SIZE]; BOARD_SIZE] }
    }

    /// Rebuilds the matrix from scratch for the given board and tables.
    pub fn rebuild(board: &Board, tables: &ZobristTables) -> ZobristMatrix {
        let mut matrix = ZobristMatrix::empty();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let pos = Pos::new(x, y);
                let stone = board.get(pos);
                if stone != Stone::Empty {
                    matrix.cells[x][y] = tables.value_for(stone, pos);
                }
            }
        }
        matrix
    }

    pub fn set(&mut self, tables: &ZobristTables, pos: Pos, color: Stone) {
        self.cells[pos.x][pos.y] = tables.value_for(color, pos);
    }

    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.x][pos.y] = 0;
    }

    /// The scalar hashmap-bucketing key: XOR of every nonzero entry.
    pub fn scalar(&self) -> u64 {
        self.cells.iter().flatten().fold(0u64, |acc, &v| acc ^ v)
    }
}

impl PartialEq for ZobristMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for ZobristMatrix {}

impl std::hash::Hash for ZobristMatrix {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.scalar().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_then_remove_restores_zero_key() {
        let tables = ZobristTables::new_random();
        let board = Board::new();
        let before = ZobristMatrix::rebuild(&board, &tables);

        let mut after = before;
        let pos = Pos::new(3, 4);
        after.set(&tables, pos, Stone::Black);
        after.clear(pos);

        assert_eq!(after, before);
        assert_eq!(after.scalar(), before.scalar());
    }

    #[test]
    fn distinct_cells_generally_get_distinct_constants() {
        let tables = ZobristTables::new_random();
        assert_ne!(tables.value_for(Stone::Black, Pos::new(0, 0)), tables.value_for(Stone::Black, Pos::new(0, 1)));
    }

    #[test]
    fn equality_requires_full_matrix_match_not_just_scalar() {
        let tables = ZobristTables::new_random();
        let mut a = ZobristMatrix::empty();
        let mut b = ZobristMatrix::empty();
        a.set(&tables, Pos::new(0, 0), Stone::Black);
        a.set(&tables, Pos::new(0, 1), Stone::Black);
        b.set(&tables, Pos::new(0, 1), Stone::Black);
        b.set(&tables, Pos::new(0, 0), Stone::Black);
        assert_eq!(a, b);
    }
}
