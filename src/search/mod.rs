//! Alpha-beta searcher and the top-level `get_next_move` driver.

pub mod threat;
pub mod tt;

use crate::gomoku::prelude::*;
use threat::generate_candidates;
use tt::{TTEntry, TranspositionTable};

pub mod prelude {
    pub use super::{new_engine, Engine};
    pub use super::tt::{TTEntry, TranspositionTable};
}

/// A single engine instance: one color, one board/state-map/Zobrist triple,
/// and the transposition table that persists across top-level queries.
pub struct Engine {
    board: Board,
    state_map: StateMap,
    zobrist_tables: ZobristTables,
    zobrist: ZobristMatrix,
    tt: TranspositionTable,
    engine_color: Stone,
    max_depth: u8,
    nodes_visited: u64,
}

/// Constructs an engine bound to one color, with a freshly seeded Zobrist
/// schedule.
pub fn new_engine(engine_color: Stone) -> Engine {
    Engine::new(engine_color)
}

impl Engine {
    pub fn new(engine_color: Stone) -> Engine {
        let board = Board::new();
        let state_map = StateMap::fresh_build(&board);
        let zobrist_tables = ZobristTables::new_random();
        let zobrist = ZobristMatrix::rebuild(&board, &zobrist_tables);
        Engine {
            board,
            state_map,
            zobrist_tables,
            zobrist,
            tt: TranspositionTable::new(),
            engine_color,
            max_depth: DEFAULT_MAX_DEPTH,
            nodes_visited: 0,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u8) -> Engine {
        self.max_depth = max_depth;
        self
    }

    /// The only move-query entry point. Resets the internal board, state
    /// map, and Zobrist matrix from `board`, then runs a depth-`max_depth`
    /// alpha-beta search. The transposition table is preserved across
    /// calls.
    pub fn get_next_move(&mut self, board: &Board) -> Pos {
        assert!(!board.is_full(), "get_next_move called on a full board");

        self.board = board.clone();
        self.state_map = StateMap::fresh_build(&self.board);
        self.zobrist = ZobristMatrix::rebuild(&self.board, &self.zobrist_tables);
        self.nodes_visited = 0;

        log::debug!("get_next_move: engine={:?} max_depth={}", self.engine_color, self.max_depth);

        let (_, score, best_move) =
            self.search(self.engine_color, SCORE_LOSE, SCORE_WIN, true, self.max_depth, Pos::center());

        log::debug!(
            "get_next_move: chose {best_move} score={score} nodes={} tt_size={}",
            self.nodes_visited,
            self.tt.len()
        );
        assert_eq!(board.get(best_move), Stone::Empty, "engine chose an occupied cell");
        best_move
    }

    fn apply(&mut self, pos: Pos, color: Stone) {
        self.board.place(pos, color);
        self.state_map.apply_stone(pos, color);
        self.zobrist.set(&self.zobrist_tables, pos, color);
    }

    fn undo(&mut self, pos: Pos) {
        self.board.remove(pos);
        self.state_map.apply_stone(pos, Stone::Empty);
        self.zobrist.clear(pos);
    }

    /// `search(side_to_move, α, β, is_max, remaining_depth)`. `entering_move`
    /// is the move that led to this node, returned verbatim at a leaf so
    /// the parent always has a best-move to report.
    fn search(
        &mut self,
        side_to_move: Stone,
        mut alpha: i32,
        mut beta: i32,
        is_max: bool,
        remaining_depth: u8,
        entering_move: Pos,
    ) -> (u8, i32, Pos) {
        self.nodes_visited += 1;

        if let Some(entry) = self.tt.probe(&self.zobrist, remaining_depth) {
            log::trace!("tt hit at depth {remaining_depth}");
            return (entry.depth, entry.score, entry.best_move);
        }

        if remaining_depth == 0 {
            let score =
                evaluate(&self.board, &self.state_map, self.engine_color) - evaluate(&self.board, &self.state_map, self.engine_color.opponent());
            return (0, score, entering_move);
        }

        let opponent = side_to_move.opponent();
        let candidates = generate_candidates(&self.board, &self.state_map, side_to_move);

        let mut best_move = candidates[0];
        let mut score = if is_max { i32::MIN } else { i32::MAX };

        for &candidate in &candidates {
            self.apply(candidate, side_to_move);

            let five = Category::Five as usize;
            let made_five = self.state_map.get(candidate).color_state(side_to_move).aggregate()[five] >= 1;

            if made_five {
                let win_score = if is_max { SCORE_WIN } else { SCORE_LOSE };
                self.tt.insert(self.zobrist, TTEntry { depth: remaining_depth, score: win_score, best_move: candidate });
                self.undo(candidate);
                return (remaining_depth, win_score, candidate);
            }

            let (_, child_score, _) =
                self.search(opponent, alpha, beta, !is_max, remaining_depth - 1, candidate);
            self.undo(candidate);

            if is_max {
                if child_score > score {
                    score = child_score;
                    best_move = candidate;
                }
                alpha = alpha.max(score);
            } else {
                if child_score < score {
                    score = child_score;
                    best_move = candidate;
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        self.tt.insert(self.zobrist, TTEntry { depth: remaining_depth, score, best_move });
        (remaining_depth, score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_move_is_board_center() {
        let board = Board::new();
        let mut engine = new_engine(Stone::Black).with_max_depth(2);
        assert_eq!(engine.get_next_move(&board), Pos::new(7, 7));
    }

    #[test]
    fn takes_an_immediate_win_when_available() {
        let mut board = Board::new();
        for y in 3..=6 {
            board.place(Pos::new(7, y), Stone::Black);
        }
        let mut engine = new_engine(Stone::Black).with_max_depth(2);
        let mv = engine.get_next_move(&board);
        assert!(mv == Pos::new(7, 2) || mv == Pos::new(7, 7));
    }

    #[test]
    fn blocks_an_immediate_opponent_threat() {
        let mut board = Board::new();
        for y in 3..=6 {
            board.place(Pos::new(7, y), Stone::White);
        }
        let mut engine = new_engine(Stone::Black).with_max_depth(2);
        let mv = engine.get_next_move(&board);
        assert!(mv == Pos::new(7, 2) || mv == Pos::new(7, 7));
    }

    #[test]
    fn move_choice_is_deterministic_across_calls() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);
        board.place(Pos::new(7, 8), Stone::White);

        let mut engine = new_engine(Stone::Black).with_max_depth(2);
        let first = engine.get_next_move(&board);
        let second = engine.get_next_move(&board);
        assert_eq!(first, second);
    }

    #[test]
    fn returned_move_is_always_empty_on_input_board() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);
        let mut engine = new_engine(Stone::White).with_max_depth(2);
        let mv = engine.get_next_move(&board);
        assert_eq!(board.get(mv), Stone::Empty);
    }

    #[test]
    fn full_board_minus_one_cell_returns_that_cell() {
        let mut board = Board::new();
        let mut empty_pos = None;
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let pos = Pos::new(x, y);
                if x == 7 && y == 7 {
                    empty_pos = Some(pos);
                    continue;
                }
                board.place(pos, if (x + y) % 2 == 0 { Stone::Black } else { Stone::White });
            }
        }
        let mut engine = new_engine(Stone::Black).with_max_depth(1);
        assert_eq!(engine.get_next_move(&board), empty_pos.unwrap());
    }

    #[test]
    fn transposition_table_reuses_entries_across_move_orders() {
        let mut via_order_a = Board::new();
        via_order_a.place(Pos::new(7, 7), Stone::Black);
        via_order_a.place(Pos::new(8, 8), Stone::White);
        via_order_a.place(Pos::new(7, 8), Stone::Black);

        let mut via_order_b = Board::new();
        via_order_b.place(Pos::new(7, 7), Stone::Black);
        via_order_b.place(Pos::new(7, 8), Stone::Black);
        via_order_b.place(Pos::new(8, 8), Stone::White);

        let mut engine_a = new_engine(Stone::Black).with_max_depth(2);
        let mut engine_b = new_engine(Stone::Black).with_max_depth(2);
        assert_eq!(engine_a.get_next_move(&via_order_a), engine_b.get_next_move(&via_order_b));
    }
}
