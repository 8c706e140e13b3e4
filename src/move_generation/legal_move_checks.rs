//! Attack and check detection.
//!
//! A square is attacked when any enemy piece could capture on it under that
//! piece's pseudo-legal attack pattern, whether or not the capture would
//! expose the attacker's own king.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::leaper_attacks::{king_attacks, knight_attacks};
use crate::moves::pawn_attacks::pawn_attacks;
use crate::moves::slider_attacks::{bishop_attacks, rook_attacks};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    let kings = game_state.pieces[color.index()][PieceKind::King.index()];
    if kings == 0 {
        None
    } else {
        Some(kings.trailing_zeros() as Square)
    }
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let attacker = &game_state.pieces[attacker_color.index()];

    // Reverse lookups: a pawn of the defending color on `square` attacks
    // exactly the squares an attacking pawn would capture from.
    if pawn_attacks(attacker_color.opposite(), square) & attacker[PieceKind::Pawn.index()] != 0 {
        return true;
    }

    if knight_attacks(square) & attacker[PieceKind::Knight.index()] != 0 {
        return true;
    }

    if king_attacks(square) & attacker[PieceKind::King.index()] != 0 {
        return true;
    }

    let queens = attacker[PieceKind::Queen.index()];

    let bishops_queens = attacker[PieceKind::Bishop.index()] | queens;
    if bishop_attacks(square, game_state.occupancy_all) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = attacker[PieceKind::Rook.index()] | queens;
    rook_attacks(square, game_state.occupancy_all) & rooks_queens != 0
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked, king_square};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_has_no_checks() {
        let game = GameState::new_game();
        assert!(!is_king_in_check(&game, Color::Light));
        assert!(!is_king_in_check(&game, Color::Dark));
        assert_eq!(king_square(&game, Color::Light), Some(4));
    }

    #[test]
    fn each_piece_kind_gives_check() {
        for fen in [
            "4k3/8/8/8/8/8/3p4/4K3 w - - 0 1",   // pawn
            "4k3/8/8/8/8/5n2/8/4K3 w - - 0 1",   // knight
            "4k3/8/8/8/1b6/8/8/4K3 w - - 0 1",   // bishop
            "4k3/8/8/8/4r3/8/8/4K3 w - - 0 1",   // rook
            "4k3/8/8/8/8/8/8/q3K3 w - - 0 1",    // queen
        ] {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            assert!(is_king_in_check(&game, Color::Light), "expected check in {fen}");
        }
    }

    #[test]
    fn blocked_ray_does_not_attack() {
        let game = GameState::from_fen("4k3/8/8/8/4r3/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&game, Color::Light));
        assert!(is_square_attacked(&game, 12, Color::Dark));
    }

    #[test]
    fn pawns_do_not_attack_straight_ahead() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4p3/3K4 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&game, 3, Color::Dark));
        assert!(!is_square_attacked(&game, 4, Color::Dark));
    }
}
