//! Pseudo-legal bishop, rook and queen moves along open rays.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::slider_attacks::{bishop_attacks, queen_attacks, rook_attacks};

pub fn generate_slider_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_for_kind(game_state, PieceKind::Bishop, bishop_attacks, out);
    generate_for_kind(game_state, PieceKind::Rook, rook_attacks, out);
    generate_for_kind(game_state, PieceKind::Queen, queen_attacks, out);
}

fn generate_for_kind(
    game_state: &GameState,
    kind: PieceKind,
    attacks: fn(Square, u64) -> u64,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];

    let mut pieces = game_state.pieces[side.index()][kind.index()];
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        let targets = attacks(from, game_state.occupancy_all) & !own_occ;
        push_target_moves(game_state, from, kind, targets, out);
        pieces &= pieces - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::generate_slider_moves;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;

    #[test]
    fn sliders_are_boxed_in_at_start() {
        let mut out = Vec::new();
        generate_slider_moves(&GameState::new_game(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn rook_stops_on_enemy_and_before_friend() {
        // Rook a1, own pawn a3, enemy knight d1.
        let game = GameState::from_fen("4k3/8/8/8/8/P7/8/R2n2K1 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_slider_moves(&game, &mut out);
        let destinations: Vec<u8> = out.iter().map(|mv| mv.destination()).collect();
        assert_eq!(destinations.len(), 4); // a2, b1, c1, d1
        let capture = out.iter().find(|mv| mv.is_capture()).expect("rook should capture on d1");
        assert_eq!(capture.destination(), 3);
        assert_eq!(capture.captured_piece(), Some(PieceKind::Knight));
    }
}
