//! Precomputed 256x256 pattern tables.
//!
//! A line pattern is an (px, py) pair of 8-bit masks describing the 8 cells
//! neighbouring a center along one direction (4 on each side, center
//! excluded). `px` marks cells occupied by the "own" color; `py` marks cells
//! occupied by the opponent or off the board. Bit 3 is the cell immediately
//! before the center, bit 4 immediately after; `has_five` walks outward from
//! there in both directions.

use std::sync::OnceLock;

use crate::gomoku::prelude::*;

const TABLE_SIZE: usize = 256;

/// Weights applied to the popcount of `px` within each rank window.
const RANK_WEIGHTS: [u32; 5] = [1, 4, 9, 16, 25];

/// Five width-4 windows slid across the 8-bit pattern, widest-to-narrowest
/// from the far side of one end to the far side of the other.
const RANK_MASKS: [u8; 5] = [0b1111_0000, 0b0111_1000, 0b0011_1100, 0b0001_1110, 0b0000_1111];

fn is_empty_bit(px: u8, py: u8, i: u32) -> bool {
    (px >> i) & 1 == 0 && (py >> i) & 1 == 0
}

/// True if the pattern already contains five contiguous own stones, counting
/// the (always-own) center implicitly.
fn has_five(px: u8, py: u8) -> bool {
    let mut run = 0u32;
    for i in [4u32, 5, 6, 7] {
        if (px >> i) & 1 == 1 && (py >> i) & 1 == 0 {
            run += 1;
        } else {
            break;
        }
    }
    for i in [3u32, 2, 1, 0] {
        if (px >> i) & 1 == 1 && (py >> i) & 1 == 0 {
            run += 1;
        } else {
            break;
        }
    }
    run >= 4
}

/// `is_category(px, py, cat)`, memoized over the (px, py, cat) state space.
/// `cat` is a raw ordinal 0..=9 (`Category as u8`).
fn is_category(px: u8, py: u8, cat: u8, memo: &mut [[[Option<bool>; NUM_CATEGORIES]; TABLE_SIZE]; TABLE_SIZE]) -> bool {
    if let Some(cached) = memo[px as usize][py as usize][cat as usize] {
        return cached;
    }

    let result = match Category::from_u8(cat) {
        Category::Five => has_five(px, py),
        Category::Block4 => step_to(px, py, Category::Five as u8, memo) == 1,
        Category::Flex4 => step_to(px, py, Category::Five as u8, memo) > 1,
        _ => step_to(px, py, cat + 2, memo) > 0,
    };

    memo[px as usize][py as usize][cat as usize] = Some(result);
    result
}

/// Counts the empty bits whose placement (as "own") would satisfy
/// `is_category(.., target)`.
fn step_to(px: u8, py: u8, target: u8, memo: &mut [[[Option<bool>; NUM_CATEGORIES]; TABLE_SIZE]; TABLE_SIZE]) -> u32 {
    let mut count = 0;
    for i in 0..8u32 {
        if is_empty_bit(px, py, i) {
            let px_new = px | (1 << i);
            if is_category(px_new, py, target, memo) {
                count += 1;
            }
        }
    }
    count
}

/// The highest category satisfied by a pattern pair; ties broken by the
/// fixed ordinal ordering (Five > Flex4 > Block4 > ... > None).
fn category_of(px: u8, py: u8, memo: &mut [[[Option<bool>; NUM_CATEGORIES]; TABLE_SIZE]; TABLE_SIZE]) -> u8 {
    for cat in (0..NUM_CATEGORIES as u8).rev() {
        if is_category(px, py, cat, memo) {
            return cat;
        }
    }
    Category::None as u8
}

fn rank_of(px: u8, py: u8) -> u32 {
    RANK_MASKS
        .iter()
        .map(|&mask| {
            if mask & py == 0 {
                RANK_WEIGHTS[(mask & px).count_ones() as usize]
            } else {
                0
            }
        })
        .sum()
}

struct PatternTables {
    category: Box<[[u8; TABLE_SIZE]; TABLE_SIZE]>,
    rank: Box<[[u32; TABLE_SIZE]; TABLE_SIZE]>,
}

fn build_tables() -> PatternTables {
    let mut memo: Box<[[[Option<bool>; NUM_CATEGORIES]; TABLE_SIZE]; TABLE_SIZE]> =
        Box::new([[[None; NUM_CATEGORIES]; TABLE_SIZE]; TABLE_SIZE]);

    let mut category = Box::new([[0u8; TABLE_SIZE]; TABLE_SIZE]);
    let mut rank = Box::new([[0u32; TABLE_SIZE]; TABLE_SIZE]);

    for px in 0..TABLE_SIZE {
        for py in 0..TABLE_SIZE {
            category[px][py] = category_of(px as u8, py as u8, &mut memo);
            rank[px][py] = rank_of(px as u8, py as u8);
        }
    }

    PatternTables { category, rank }
}

static TABLES: OnceLock<PatternTables> = OnceLock::new();

fn tables() -> &'static PatternTables {
    TABLES.get_or_init(build_tables)
}

/// The category of a line pattern pair.
pub fn category(px: u8, py: u8) -> Category {
    Category::from_u8(tables().category[px as usize][py as usize])
}

/// The heuristic rank of a line pattern pair.
pub fn rank(px: u8, py: u8) -> u32 {
    tables().rank[px as usize][py as usize]
}
