//! Pawn capture patterns.
//!
//! Pawn pushes depend on occupancy and live in the pawn move generator; this
//! table only covers the diagonal squares a pawn attacks.

use crate::game_state::chess_types::{Color, Square};

pub const LIGHT_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const DARK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_pawn_attacks(rank_step: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let target_rank = rank + rank_step;
        let mut attacks = 0u64;

        if target_rank >= 0 && target_rank < 8 {
            if file > 0 {
                attacks |= 1u64 << ((target_rank * 8 + file - 1) as u32);
            }
            if file < 7 {
                attacks |= 1u64 << ((target_rank * 8 + file + 1) as u32);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::Color;

    #[test]
    fn light_pawn_attacks_from_e2() {
        let e2 = 12u8;
        assert_eq!(pawn_attacks(Color::Light, e2), (1u64 << 19) | (1u64 << 21));
    }

    #[test]
    fn dark_pawn_attacks_from_a7_stay_on_board() {
        let a7 = 48u8;
        assert_eq!(pawn_attacks(Color::Dark, a7), 1u64 << 41);
    }

    #[test]
    fn pawns_on_last_rank_attack_nothing() {
        assert_eq!(pawn_attacks(Color::Light, 60), 0);
        assert_eq!(pawn_attacks(Color::Dark, 3), 0);
    }
}
