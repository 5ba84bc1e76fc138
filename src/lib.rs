#![allow(dead_code)]

pub mod gomoku;
pub mod search;

pub mod prelude {
    pub use super::gomoku::prelude::*;
    pub use super::search::prelude::*;
}
