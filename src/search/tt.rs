//! Transposition table: unconditional overwrite, no eviction.

use std::collections::HashMap;

use crate::gomoku::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub depth: u8,
    pub score: i32,
    pub best_move: Pos,
}

#[derive(Default)]
pub struct TranspositionTable {
    entries: HashMap<ZobristMatrix, TTEntry>,
}

impl TranspositionTable {
    pub fn new() -> TranspositionTable {
        TranspositionTable::default()
    }

    /// Returns the stored entry only if it was computed at least as deep as
    /// the caller's remaining depth (a shallower entry cannot stand in for
    /// a deeper search).
    pub fn probe(&self, key: &ZobristMatrix, remaining_depth: u8) -> Option<TTEntry> {
        self.entries.get(key).copied().filter(|entry| entry.depth >= remaining_depth)
    }

    pub fn insert(&mut self, key: ZobristMatrix, entry: TTEntry) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
