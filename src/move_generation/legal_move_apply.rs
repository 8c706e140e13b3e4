//! Move application.
//!
//! `apply_move` is the checked entry point: it only accepts moves that appear
//! in `legal_moves` for the given state. `make_move` performs the transition
//! for moves the generator produced and is also used to test candidate moves
//! for self-check.

use crate::errors::InvalidMoveError;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::legal_moves_castling::{castling_path_for, castling_right_for_rook_square};
use crate::move_generation::legal_moves_pawn::en_passant_victim_square;
use crate::moves::move_descriptions::Move;

/// Apply a legal move, producing the next state.
pub fn apply_move(game_state: &GameState, mv: Move) -> Result<GameState, InvalidMoveError> {
    if !legal_moves(game_state).contains(&mv) {
        return Err(InvalidMoveError {
            attempted: mv,
            fen: game_state.get_fen(),
        });
    }
    Ok(make_move(game_state, mv))
}

/// Transition for a generator-produced (pseudo-legal) move.
pub(crate) fn make_move(game_state: &GameState, mv: Move) -> GameState {
    let from = mv.origin();
    let to = mv.destination();
    let from_mask = square_bit(from);
    let to_mask = square_bit(to);

    let moving_color = game_state.side_to_move;
    let enemy_color = moving_color.opposite();
    let moved_piece = mv.moved_piece();

    debug_assert!(
        game_state.pieces[moving_color.index()][moved_piece.index()] & from_mask != 0,
        "move {mv} does not start on a {moved_piece:?} of the side to move"
    );

    let mut next = game_state.clone();

    next.pieces[moving_color.index()][moved_piece.index()] &= !from_mask;

    if mv.is_en_passant() {
        let victim = en_passant_victim_square(moving_color, to);
        next.pieces[enemy_color.index()][PieceKind::Pawn.index()] &= !square_bit(victim);
    } else if let Some(captured) = mv.captured_piece() {
        next.pieces[enemy_color.index()][captured.index()] &= !to_mask;
    }

    let placed = mv.promotion_piece().unwrap_or(moved_piece);
    next.pieces[moving_color.index()][placed.index()] |= to_mask;

    if mv.is_castling() {
        if let Some(path) = castling_path_for(from, to) {
            let rooks = &mut next.pieces[moving_color.index()][PieceKind::Rook.index()];
            *rooks &= !square_bit(path.rook_from);
            *rooks |= square_bit(path.rook_to);
        }
    }

    update_castling_rights(&mut next, moving_color, from, to, moved_piece);

    next.en_passant_square = if mv.is_double_pawn_push() {
        Some((from + to) / 2)
    } else {
        None
    };

    if mv.is_zeroing() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Dark {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = enemy_color;
    next.recalc_occupancy();

    next
}

// Rights only ever turn off.
fn update_castling_rights(
    game_state: &mut GameState,
    moving_color: Color,
    from: Square,
    to: Square,
    moved_piece: PieceKind,
) {
    if moved_piece == PieceKind::King {
        game_state.castling_rights &= match moving_color {
            Color::Light => !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE),
            Color::Dark => !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE),
        };
    }

    // A rook leaving its corner, or anything captured on a corner.
    game_state.castling_rights &= !castling_right_for_rook_square(from);
    game_state.castling_rights &= !castling_right_for_rook_square(to);
}
