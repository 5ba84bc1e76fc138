pub mod cell_state;
pub mod evaluator;
pub mod state_map;
pub mod zobrist;

use crate::gomoku::prelude::*;

/// A 15x15 grid of stones. Out-of-bounds access is a programmer error:
/// it asserts rather than returning an `Option`/`Result`.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [[Stone; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Board {
        Board { cells: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE] }
    }

    pub fn from_grid(cells: [[Stone; BOARD_SIZE]; BOARD_SIZE]) -> Board {
        Board { cells }
    }

    pub fn get(&self, pos: Pos) -> Stone {
        assert!(pos.in_bounds(), "board access out of bounds: {pos}");
        self.cells[pos.x][pos.y]
    }

    /// Places a stone on an empty cell; asserts the cell was empty.
    pub fn place(&mut self, pos: Pos, color: Stone) {
        assert!(pos.in_bounds(), "board placement out of bounds: {pos}");
        assert_ne!(color, Stone::Empty, "cannot place an empty stone");
        assert_eq!(self.cells[pos.x][pos.y], Stone::Empty, "placing on a non-empty cell {pos}");
        self.cells[pos.x][pos.y] = color;
    }

    /// Removes whatever stone occupies a cell, returning it; asserts the
    /// cell was occupied.
    pub fn remove(&mut self, pos: Pos) -> Stone {
        assert!(pos.in_bounds(), "board removal out of bounds: {pos}");
        let prev = self.cells[pos.x][pos.y];
        assert_ne!(prev, Stone::Empty, "removing from an already-empty cell {pos}");
        self.cells[pos.x][pos.y] = Stone::Empty;
        prev
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&s| s != Stone::Empty)
    }

    /// Parses a 15-line, 15-char-per-line board ('.' empty, 'B' black, 'W'
    /// white), the external-facing boundary where a real error, not an
    /// assertion, is the right failure mode.
    pub fn parse(text: &str) -> Result<Board> {
        let mut cells = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() != BOARD_SIZE {
            return Err(anyhow!("expected {BOARD_SIZE} non-empty rows, found {}", lines.len()));
        }
        for (x, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(anyhow!("row {x} has {} columns, expected {BOARD_SIZE}", chars.len()));
            }
            for (y, &c) in chars.iter().enumerate() {
                cells[x][y] = match c {
                    '.' => Stone::Empty,
                    'B' => Stone::Black,
                    'W' => Stone::White,
                    other => return Err(anyhow!("unrecognized board symbol '{other}' at ({x}, {y})")),
                };
            }
        }
        Ok(Board { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
