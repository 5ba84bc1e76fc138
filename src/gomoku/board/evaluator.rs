//! Static position evaluator.

use crate::gomoku::prelude::*;

/// `Σ over cells occupied by `color` of `Σ_d rank(pattern_of(color, d))``.
pub fn evaluate(board: &Board, state_map: &StateMap, color: Stone) -> i32 {
    let mut total: i64 = 0;
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            let pos = Pos::new(x, y);
            if board.get(pos) != color {
                continue;
            }
            let view = state_map.get(pos).color_state(color);
            for pattern in &view.patterns {
                total += patterns::rank(pattern.px, pattern.py) as i64;
            }
        }
    }
    total as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_evaluates_to_zero_for_either_color() {
        let board = Board::new();
        let state_map = StateMap::fresh_build(&board);
        assert_eq!(evaluate(&board, &state_map, Stone::Black), 0);
        assert_eq!(evaluate(&board, &state_map, Stone::White), 0);
    }

    #[test]
    fn a_lone_stone_scores_strictly_positive() {
        let mut board = Board::new();
        board.place(Pos::center(), Stone::Black);
        let state_map = StateMap::fresh_build(&board);
        assert!(evaluate(&board, &state_map, Stone::Black) > 0);
        assert_eq!(evaluate(&board, &state_map, Stone::White), 0);
    }

    #[test]
    fn denser_formation_outscores_a_single_stone() {
        let mut lone = Board::new();
        lone.place(Pos::center(), Stone::Black);
        let lone_map = StateMap::fresh_build(&lone);

        let mut formation = Board::new();
        formation.place(Pos::center(), Stone::Black);
        formation.place(Pos::new(7, 8), Stone::Black);
        formation.place(Pos::new(7, 9), Stone::Black);
        let formation_map = StateMap::fresh_build(&formation);

        assert!(
            evaluate(&formation, &formation_map, Stone::Black) > evaluate(&lone, &lone_map, Stone::Black)
        );
    }
}
