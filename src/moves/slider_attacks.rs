//! Occupancy-aware ray attacks for bishops, rooks and queens.
//!
//! Rays run outward from the origin and stop on (and include) the first
//! occupied square, whichever color stands there.

use crate::game_state::chess_types::Square;

const DIAGONAL_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
const ORTHOGONAL_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    sliding_attacks(square, occupancy, &DIAGONAL_DIRECTIONS)
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    sliding_attacks(square, occupancy, &ORTHOGONAL_DIRECTIONS)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

fn sliding_attacks(square: Square, occupancy: u64, directions: &[(i32, i32); 4]) -> u64 {
    let origin_file = (square % 8) as i32;
    let origin_rank = (square / 8) as i32;
    let mut attacks = 0u64;

    for &(file_step, rank_step) in directions {
        let mut file = origin_file + file_step;
        let mut rank = origin_rank + rank_step;

        while (0..8).contains(&file) && (0..8).contains(&rank) {
            let bit = 1u64 << ((rank * 8 + file) as u32);
            attacks |= bit;

            if occupancy & bit != 0 {
                break;
            }

            file += file_step;
            rank += rank_step;
        }
    }

    attacks
}
