//! Position-equivalence class used for repetition detection.
//!
//! Two states are the same position when placement, side to move, castling
//! rights and the en-passant target agree. The en-passant target only counts
//! while a pawn of the side to move actually attacks it; a dead target square
//! offers no extra move and would otherwise split identical positions.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::pawn_attacks::pawn_attacks;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSignature {
    pieces: [[u64; 6]; 2],
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
}

impl PositionSignature {
    pub fn of(game_state: &GameState) -> Self {
        Self {
            pieces: game_state.pieces,
            side_to_move: game_state.side_to_move,
            castling_rights: game_state.castling_rights,
            en_passant_square: capturable_en_passant_square(game_state),
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
}

/// En-passant target that a pawn of the side to move could capture onto.
pub fn capturable_en_passant_square(game_state: &GameState) -> Option<Square> {
    let ep = game_state.en_passant_square?;
    let side = game_state.side_to_move;
    // Squares from which a `side` pawn attacks `ep` are the squares an enemy
    // pawn standing on `ep` would attack.
    let capturers = pawn_attacks(side.opposite(), ep) & game_state.bitboard(side, PieceKind::Pawn);
    (capturers != 0).then_some(ep)
}
