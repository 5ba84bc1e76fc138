//! The Gomoku board model: stones, coordinates, precomputed pattern tables,
//! and the board/state-map/Zobrist trio the search module drives.

pub mod board;
pub mod consts;
pub mod coords;
pub mod patterns;

pub mod prelude {
    pub use anyhow::{anyhow, Context, Error};
    pub type Result<T> = anyhow::Result<T, Error>;

    pub use super::board::cell_state::{CellState, ColorState, LinePattern};
    pub use super::board::evaluator::evaluate;
    pub use super::board::state_map::StateMap;
    pub use super::board::zobrist::{ZobristMatrix, ZobristTables};
    pub use super::board::Board;
    pub use super::consts::*;
    pub use super::coords::*;
    pub use super::patterns;
}
