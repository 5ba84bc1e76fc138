//! Threat-driven move generator: ranks candidate cells by the forcing
//! patterns they create or block before falling back to a general,
//! rank-sorted scan.

use std::collections::HashSet;

use crate::gomoku::prelude::*;

/// The single-cell fallback used when no empty cell anywhere has a neighbor
/// (correct only on an effectively empty board).
fn fallback() -> Vec<Pos> {
    vec![Pos::new(7, 7)]
}

fn union_dedup(mut a: Vec<Pos>, b: Vec<Pos>) -> Vec<Pos> {
    let mut seen: HashSet<Pos> = a.iter().copied().collect();
    for p in b {
        if seen.insert(p) {
            a.push(p);
        }
    }
    a
}

fn rank_for(state_map: &StateMap, color: Stone, pos: Pos) -> u32 {
    state_map
        .get(pos)
        .color_state(color)
        .patterns
        .iter()
        .map(|p| patterns::rank(p.px, p.py))
        .sum()
}

/// Produces the ordered candidate list for `side_to_move`. Buckets are
/// collected in one row-major pass, most urgent first; the first non-empty
/// bucket is returned.
pub fn generate_candidates(board: &Board, state_map: &StateMap, side_to_move: Stone) -> Vec<Pos> {
    let opponent = side_to_move.opponent();

    let five = Category::Five as usize;
    let flex4 = Category::Flex4 as usize;
    let block4 = Category::Block4 as usize;
    let flex3 = Category::Flex3 as usize;

    let mut me_five = Vec::new();
    let mut op_five = Vec::new();
    let mut me_flex4 = Vec::new();
    let mut op_flex4 = Vec::new();
    let mut me_b4b4 = Vec::new();
    let mut op_b4b4 = Vec::new();
    let mut me_b4f3 = Vec::new();
    let mut op_b4f3 = Vec::new();
    let mut me_2flex3 = Vec::new();
    let mut op_2flex3 = Vec::new();
    let mut me_block4 = Vec::new();
    let mut me_flex3 = Vec::new();
    let mut general: Vec<(Pos, u32)> = Vec::new();

    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            let pos = Pos::new(x, y);
            if board.get(pos) != Stone::Empty {
                continue;
            }
            let cell = state_map.get(pos);
            if !cell.has_neighbor() {
                continue;
            }

            let we = cell.color_state(side_to_move).aggregate();
            let op = cell.color_state(opponent).aggregate();

            if we[five] >= 1 {
                me_five.push(pos);
            }
            if op[five] >= 1 {
                op_five.push(pos);
            }
            if we[flex4] >= 1 {
                me_flex4.push(pos);
            }
            if op[flex4] >= 1 {
                op_flex4.push(pos);
            }
            if we[block4] > 1 {
                me_b4b4.push(pos);
            }
            if op[block4] > 1 {
                op_b4b4.push(pos);
            }
            if we[block4] >= 1 && we[flex3] >= 1 {
                me_b4f3.push(pos);
            }
            if op[block4] >= 1 && op[flex3] >= 1 {
                op_b4f3.push(pos);
            }
            if we[flex3] > 1 {
                me_2flex3.push(pos);
            }
            if op[flex3] > 1 {
                op_2flex3.push(pos);
            }
            if we[block4] >= 1 {
                me_block4.push(pos);
            }
            if we[flex3] >= 1 {
                me_flex3.push(pos);
            }

            general.push((pos, rank_for(state_map, side_to_move, pos)));
        }
    }

    if !me_five.is_empty() {
        return me_five;
    }
    if !op_five.is_empty() {
        return op_five;
    }
    if !me_flex4.is_empty() {
        return me_flex4;
    }
    if !me_b4b4.is_empty() {
        return me_b4b4;
    }
    if !me_b4f3.is_empty() {
        return me_b4f3;
    }

    let defend_flex4 = union_dedup(op_flex4, me_block4.clone());
    if !defend_flex4.is_empty() {
        return defend_flex4;
    }
    let defend_b4b4 = union_dedup(op_b4b4, me_block4.clone());
    if !defend_b4b4.is_empty() {
        return defend_b4b4;
    }
    let defend_b4f3 = union_dedup(op_b4f3, me_block4.clone());
    if !defend_b4f3.is_empty() {
        return defend_b4f3;
    }
    if !me_2flex3.is_empty() {
        return me_2flex3;
    }
    let defend_2flex3 = union_dedup(union_dedup(op_2flex3, me_block4), me_flex3);
    if !defend_2flex3.is_empty() {
        return defend_2flex3;
    }

    if general.is_empty() {
        return fallback();
    }
    general.sort_by(|a, b| b.1.cmp(&a.1));
    general.into_iter().map(|(pos, _)| pos).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_falls_back_to_center() {
        let board = Board::new();
        let state_map = StateMap::fresh_build(&board);
        assert_eq!(generate_candidates(&board, &state_map, Stone::Black), vec![Pos::new(7, 7)]);
    }

    #[test]
    fn winning_move_is_prioritized_above_everything() {
        let mut board = Board::new();
        // Black at (7,3..6): placing at (7,7) or (7,2) completes five.
        for y in 3..=6 {
            board.place(Pos::new(7, y), Stone::Black);
        }
        let state_map = StateMap::fresh_build(&board);
        let candidates = generate_candidates(&board, &state_map, Stone::Black);
        assert!(candidates.contains(&Pos::new(7, 7)) || candidates.contains(&Pos::new(7, 2)));
        assert!(candidates.iter().all(|&p| p == Pos::new(7, 7) || p == Pos::new(7, 2)));
    }

    #[test]
    fn must_block_opponent_open_four() {
        let mut board = Board::new();
        for y in 4..=7 {
            board.place(Pos::new(5, y), Stone::White);
        }
        let state_map = StateMap::fresh_build(&board);
        let candidates = generate_candidates(&board, &state_map, Stone::Black);
        assert!(candidates.contains(&Pos::new(5, 3)) || candidates.contains(&Pos::new(5, 8)));
    }

    #[test]
    fn double_three_intersection_is_prioritized() {
        let mut board = Board::new();
        // Two separate open-three threats for black, both completed by a
        // stone at (7, 7): one running along the row (dir0), one along the
        // column (dir2), each with both flanks still open.
        board.place(Pos::new(8, 7), Stone::Black);
        board.place(Pos::new(9, 7), Stone::Black);
        board.place(Pos::new(7, 8), Stone::Black);
        board.place(Pos::new(7, 9), Stone::Black);
        let state_map = StateMap::fresh_build(&board);

        let candidates = generate_candidates(&board, &state_map, Stone::Black);
        assert!(candidates.contains(&Pos::new(7, 7)));

        let cell = state_map.get(Pos::new(7, 7));
        assert!(cell.color_state(Stone::Black).aggregate()[Category::Flex3 as usize] > 1);
    }

    #[test]
    fn general_bucket_is_sorted_descending_by_rank() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);
        board.place(Pos::new(0, 0), Stone::White);
        let state_map = StateMap::fresh_build(&board);
        let candidates = generate_candidates(&board, &state_map, Stone::Black);
        let ranks: Vec<u32> = candidates.iter().map(|&p| rank_for(&state_map, Stone::Black, p)).collect();
        assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
    }
}
