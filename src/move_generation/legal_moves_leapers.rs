//! Pseudo-legal knight and king steps (castling lives in its own module).

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::leaper_attacks::{king_attacks, knight_attacks};
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];

    let mut knights = game_state.pieces[side.index()][PieceKind::Knight.index()];
    while knights != 0 {
        let from = knights.trailing_zeros() as Square;
        push_target_moves(game_state, from, PieceKind::Knight, knight_attacks(from) & !own_occ, out);
        knights &= knights - 1;
    }
}

pub fn generate_king_steps(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];

    let king_bb = game_state.pieces[side.index()][PieceKind::King.index()];
    if king_bb == 0 {
        return;
    }

    let from = king_bb.trailing_zeros() as Square;
    push_target_moves(game_state, from, PieceKind::King, king_attacks(from) & !own_occ, out);
}

#[cfg(test)]
mod tests {
    use super::{generate_king_steps, generate_knight_moves};
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_knights_have_four_moves() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_knight_moves(&game, &mut out);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|mv| !mv.is_capture()));
    }

    #[test]
    fn king_steps_flag_captures() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_steps(&game, &mut out);
        assert_eq!(out.len(), 5);
        assert_eq!(out.iter().filter(|mv| mv.is_capture()).count(), 1);
    }
}
