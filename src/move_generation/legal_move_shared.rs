//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{Move, FLAG_CAPTURE};

/// Kind of the enemy piece standing on `square`, if any.
#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square) -> Option<PieceKind> {
    let enemy = game_state.side_to_move.opposite();
    let mask = square_bit(square);
    if game_state.occupancy_by_color[enemy.index()] & mask == 0 {
        return None;
    }
    ALL_PIECE_KINDS
        .into_iter()
        .find(|kind| game_state.pieces[enemy.index()][kind.index()] & mask != 0)
}

/// Emit one move per set bit of `targets`, flagging captures.
///
/// `targets` must already exclude squares held by the side to move.
pub fn push_target_moves(
    game_state: &GameState,
    from: Square,
    moved_piece: PieceKind,
    mut targets: u64,
    out: &mut Vec<Move>,
) {
    let enemy_occ = game_state.occupancy_by_color[game_state.side_to_move.opposite().index()];

    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        let is_capture = square_bit(to) & enemy_occ != 0;
        let captured = if is_capture {
            enemy_piece_on(game_state, to)
        } else {
            None
        };
        out.push(Move::new(
            from,
            to,
            moved_piece,
            captured,
            None,
            if is_capture { FLAG_CAPTURE } else { 0 },
        ));
        targets &= targets - 1;
    }
}
