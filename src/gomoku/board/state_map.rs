//! The 15x15 array of cell states kept consistent with the board.

use crate::gomoku::prelude::*;

pub struct StateMap {
    cells: Box<[[CellState; BOARD_SIZE]; BOARD_SIZE]>,
}

impl StateMap {
    /// Builds every cell's state from scratch by scanning `board`. Used at
    /// the start of each top-level `get_next_move` call.
    pub fn fresh_build(board: &Board) -> StateMap {
        let mut cells = Box::new([[CellState::default(); BOARD_SIZE]; BOARD_SIZE]);
        for (x, row) in cells.iter_mut().enumerate() {
            for (y, cell) in row.iter_mut().enumerate() {
                *cell = CellState::build(board, Pos::new(x, y));
            }
        }
        StateMap { cells }
    }

    pub fn get(&self, pos: Pos) -> &CellState {
        assert!(pos.in_bounds(), "state map access out of bounds: {pos}");
        &self.cells[pos.x][pos.y]
    }

    /// Propagates the consequence of `pos` changing to `delta` (place or,
    /// for `Stone::Empty`, remove) to every cell within radius 4 along each
    /// direction.
    pub fn apply_stone(&mut self, pos: Pos, delta: Stone) {
        assert!(pos.in_bounds(), "state map update out of bounds: {pos}");

        for (d, dir) in DIRECTIONS.iter().enumerate() {
            for s in (-4..=4).filter(|&s| s != 0) {
                if let Some(neighbor) = pos.step(*dir, s) {
                    let affected = &mut self.cells[neighbor.x][neighbor.y];
                    // From `neighbor`'s perspective, `pos` sits at offset `-s`.
                    affected.apply_neighbor_change(d, -s, delta);
                }
            }
        }
    }
}
