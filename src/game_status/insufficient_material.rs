//! Dead-position detection by material.
//!
//! Neither side can deliver mate when there are no pawns, rooks or queens and
//! either at most one minor piece remains, or every remaining minor piece is
//! a bishop and all of them stand on squares of one color.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

const LIGHT_SQUARES: u64 = 0x55AA_55AA_55AA_55AA;
const DARK_SQUARES: u64 = !LIGHT_SQUARES;

pub fn has_insufficient_material(game_state: &GameState) -> bool {
    let both = |kind: PieceKind| {
        game_state.bitboard(Color::Light, kind) | game_state.bitboard(Color::Dark, kind)
    };

    if both(PieceKind::Pawn) | both(PieceKind::Rook) | both(PieceKind::Queen) != 0 {
        return false;
    }

    let knights = both(PieceKind::Knight);
    let bishops = both(PieceKind::Bishop);

    if (knights | bishops).count_ones() <= 1 {
        return true;
    }

    knights == 0 && (bishops & LIGHT_SQUARES == 0 || bishops & DARK_SQUARES == 0)
}
