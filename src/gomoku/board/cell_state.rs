//! Per-cell direction-wise pattern state.

use crate::gomoku::prelude::*;

/// An (px, py) pair for one color along one direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinePattern {
    pub px: u8,
    pub py: u8,
}

/// Maps a signed offset `-4..=4 \ {0}` to the bit it occupies within a
/// `LinePattern`. Bit 3 sits just before the center, bit 4 just after
/// (see `patterns` for why `has_five` walks outward from there).
fn bit_index_for_offset(offset: i32) -> u32 {
    debug_assert!(offset != 0 && offset >= -4 && offset <= 4);
    if offset < 0 {
        (offset + 4) as u32
    } else {
        (offset + 3) as u32
    }
}

/// One color's view of a cell: its four directional patterns and the
/// per-direction category each currently resolves to.
#[derive(Clone, Copy, Debug)]
pub struct ColorState {
    pub patterns: [LinePattern; 4],
    /// One-hot per direction: `category_hist[d][c]` is 1 if direction `d`'s
    /// pattern resolves to category `c`, else 0. Mirrors the source's
    /// `cats_blk`/`cats_wht` histograms directly rather than collapsing each
    /// direction to a single category index.
    pub category_hist: [[u32; NUM_CATEGORIES]; 4],
}

impl Default for ColorState {
    fn default() -> Self {
        ColorState {
            patterns: [LinePattern::default(); 4],
            category_hist: [[0; NUM_CATEGORIES]; 4],
        }
    }
}

impl ColorState {
    fn recompute_direction(&mut self, d: usize) {
        let LinePattern { px, py } = self.patterns[d];
        let cat = patterns::category(px, py) as usize;
        self.category_hist[d] = [0; NUM_CATEGORIES];
        self.category_hist[d][cat] = 1;
    }

    /// Sums the four per-direction histograms into one aggregate count per
    /// category for this color.
    pub fn aggregate(&self) -> [u32; NUM_CATEGORIES] {
        let mut out = [0u32; NUM_CATEGORIES];
        for hist in &self.category_hist {
            for (c, &v) in hist.iter().enumerate() {
                out[c] += v;
            }
        }
        out
    }
}

/// The full per-cell state: both colors' patterns, plus the near-neighbor
/// counts used to decide `has_neighbor`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CellState {
    pub black: ColorState,
    pub white: ColorState,
    pub neighbors: [u32; 4],
}

impl CellState {
    pub fn has_neighbor(&self) -> bool {
        self.neighbors.iter().sum::<u32>() > 0
    }

    pub fn color_state(&self, color: Stone) -> &ColorState {
        match color {
            Stone::Black => &self.black,
            Stone::White => &self.white,
            Stone::Empty => panic!("cell state has no color view for Stone::Empty"),
        }
    }

    fn color_state_mut(&mut self, color: Stone) -> &mut ColorState {
        match color {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
            Stone::Empty => panic!("cell state has no color view for Stone::Empty"),
        }
    }

    /// Fresh-builds the state for one cell by scanning its four directions
    /// on the given board. Used both for `StateMap::fresh_build` and as the
    /// ground truth that incremental updates must agree with.
    pub fn build(board: &Board, pos: Pos) -> CellState {
        let mut state = CellState::default();

        for (d, dir) in DIRECTIONS.iter().enumerate() {
            for s in (-4..=4).filter(|&s| s != 0) {
                let bit = bit_index_for_offset(s);
                match pos.step(*dir, s) {
                    None => {
                        state.black.patterns[d].py |= 1 << bit;
                        state.white.patterns[d].py |= 1 << bit;
                    }
                    Some(p) => match board.get(p) {
                        Stone::Empty => {}
                        Stone::Black => {
                            state.black.patterns[d].px |= 1 << bit;
                            state.white.patterns[d].py |= 1 << bit;
                        }
                        Stone::White => {
                            state.white.patterns[d].px |= 1 << bit;
                            state.black.patterns[d].py |= 1 << bit;
                        }
                    },
                }
                if s.abs() <= 2 {
                    if let Some(p) = pos.step(*dir, s) {
                        if board.get(p) != Stone::Empty {
                            state.neighbors[d] += 1;
                        }
                    }
                }
            }
            state.black.recompute_direction(d);
            state.white.recompute_direction(d);
        }

        state
    }

    /// Applies the consequence, at this cell, of a neighbor at signed
    /// `offset` (relative to this cell) along direction `d` changing to
    /// `delta`. `delta == Stone::Empty` models a removal.
    pub fn apply_neighbor_change(&mut self, d: usize, offset: i32, delta: Stone) {
        let bit = bit_index_for_offset(offset);
        let mask = 1u8 << bit;

        match delta {
            Stone::Empty => {
                self.black.patterns[d].px &= !mask;
                self.black.patterns[d].py &= !mask;
                self.white.patterns[d].px &= !mask;
                self.white.patterns[d].py &= !mask;
                if offset.abs() <= 2 {
                    self.neighbors[d] = self.neighbors[d].saturating_sub(1);
                }
            }
            Stone::Black => {
                self.black.patterns[d].px |= mask;
                self.white.patterns[d].py |= mask;
                if offset.abs() <= 2 {
                    self.neighbors[d] += 1;
                }
            }
            Stone::White => {
                self.white.patterns[d].px |= mask;
                self.black.patterns[d].py |= mask;
                if offset.abs() <= 2 {
                    self.neighbors[d] += 1;
                }
            }
        }

        self.black.recompute_direction(d);
        self.white.recompute_direction(d);
    }
}
