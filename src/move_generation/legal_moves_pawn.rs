//! Pseudo-legal pawn moves: pushes, double pushes, captures, en passant and
//! promotions (one move per promotion piece).

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::{Move, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT};
use crate::moves::pawn_attacks::pawn_attacks;

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];
    let empty = !game_state.occupancy_all;

    let mut pawns = game_state.pieces[side.index()][PieceKind::Pawn.index()];
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;

        // Pawns never stand on their promotion rank, so one step stays on board.
        let one_step = forward(side, from, 1);
        if square_bit(one_step) & empty != 0 {
            push_pawn_move(side, from, one_step, None, 0, out);

            if square_rank(from) == side.pawn_start_rank() {
                let two_step = forward(side, from, 2);
                if square_bit(two_step) & empty != 0 {
                    out.push(Move::new(
                        from,
                        two_step,
                        PieceKind::Pawn,
                        None,
                        None,
                        FLAG_DOUBLE_PAWN_PUSH,
                    ));
                }
            }
        }

        let mut captures = pawn_attacks(side, from) & enemy_occ;
        while captures != 0 {
            let to = captures.trailing_zeros() as Square;
            push_pawn_move(side, from, to, enemy_piece_on(game_state, to), FLAG_CAPTURE, out);
            captures &= captures - 1;
        }

        // The target is only ever set right after an enemy double push, so
        // the pawn to take sits directly behind it.
        if let Some(ep) = game_state.en_passant_square {
            if pawn_attacks(side, from) & square_bit(ep) != 0 {
                debug_assert!(
                    game_state.occupancy_all & square_bit(ep) == 0
                        && game_state.pieces[side.opposite().index()][PieceKind::Pawn.index()]
                            & square_bit(en_passant_victim_square(side, ep))
                            != 0,
                    "en-passant target {ep} does not follow a double push"
                );
                out.push(Move::new(
                    from,
                    ep,
                    PieceKind::Pawn,
                    Some(PieceKind::Pawn),
                    None,
                    FLAG_CAPTURE | FLAG_EN_PASSANT,
                ));
            }
        }

        pawns &= pawns - 1;
    }
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
pub fn en_passant_victim_square(mover: Color, to: Square) -> Square {
    match mover {
        Color::Light => to - 8,
        Color::Dark => to + 8,
    }
}

#[inline]
fn forward(side: Color, from: Square, ranks: u8) -> Square {
    match side {
        Color::Light => from + 8 * ranks,
        Color::Dark => from - 8 * ranks,
    }
}

fn push_pawn_move(
    side: Color,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    flags: u64,
    out: &mut Vec<Move>,
) {
    if square_rank(to) == side.promotion_rank() {
        for promo in PROMOTION_PIECE_KINDS {
            out.push(Move::new(from, to, PieceKind::Pawn, captured, Some(promo), flags));
        }
    } else {
        out.push(Move::new(from, to, PieceKind::Pawn, captured, None, flags));
    }
}
