//! Castling generation.
//!
//! Castling needs the matching right (king and rook unmoved), the rook on its
//! corner, every square between king and rook empty, the king not in check,
//! and neither the square the king crosses nor its destination attacked.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::{Move, FLAG_CASTLING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPath {
    pub right: CastlingRights,
    pub color: Color,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook.
    pub between: u64,
    /// Squares the king crosses or lands on.
    pub king_path: [Square; 2],
}

pub const CASTLING_PATHS: [CastlingPath; 4] = [
    CastlingPath {
        right: CASTLE_LIGHT_KINGSIDE,
        color: Color::Light,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        between: (1 << 5) | (1 << 6),
        king_path: [5, 6],
    },
    CastlingPath {
        right: CASTLE_LIGHT_QUEENSIDE,
        color: Color::Light,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        between: (1 << 1) | (1 << 2) | (1 << 3),
        king_path: [3, 2],
    },
    CastlingPath {
        right: CASTLE_DARK_KINGSIDE,
        color: Color::Dark,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        between: (1 << 61) | (1 << 62),
        king_path: [61, 62],
    },
    CastlingPath {
        right: CASTLE_DARK_QUEENSIDE,
        color: Color::Dark,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        between: (1 << 57) | (1 << 58) | (1 << 59),
        king_path: [59, 58],
    },
];

/// Path for a castling king move, looked up by the king's squares.
pub fn castling_path_for(king_from: Square, king_to: Square) -> Option<&'static CastlingPath> {
    CASTLING_PATHS
        .iter()
        .find(|path| path.king_from == king_from && path.king_to == king_to)
}

/// Castling right lost when a piece leaves or is captured on `square`.
pub fn castling_right_for_rook_square(square: Square) -> CastlingRights {
    CASTLING_PATHS
        .iter()
        .filter(|path| path.rook_from == square)
        .fold(0, |acc, path| acc | path.right)
}

pub fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let king_bb = game_state.pieces[side.index()][PieceKind::King.index()];
    let rook_bb = game_state.pieces[side.index()][PieceKind::Rook.index()];

    let mut in_check: Option<bool> = None;

    for path in CASTLING_PATHS.iter().filter(|path| path.color == side) {
        if !game_state.can_castle(path.right)
            || king_bb & square_bit(path.king_from) == 0
            || rook_bb & square_bit(path.rook_from) == 0
            || game_state.occupancy_all & path.between != 0
        {
            continue;
        }

        // Cannot castle out of check.
        if *in_check.get_or_insert_with(|| is_square_attacked(game_state, path.king_from, enemy)) {
            return;
        }

        if path
            .king_path
            .iter()
            .any(|sq| is_square_attacked(game_state, *sq, enemy))
        {
            continue;
        }

        out.push(Move::new(
            path.king_from,
            path.king_to,
            PieceKind::King,
            None,
            None,
            FLAG_CASTLING,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::{castling_right_for_rook_square, generate_castling_moves};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    fn castles(fen: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_castling_moves(&game, &mut out);
        out.iter().map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn both_sides_available_on_open_back_rank() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec!["e1g1", "e1c1"]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), vec!["e8g8", "e8c8"]);
    }

    #[test]
    fn no_castling_out_of_check() {
        assert!(castles("r3k2r/8/8/8/4r3/8/8/R3K2R w KQkq - 0 1").is_empty());
    }

    #[test]
    fn no_castling_through_attacked_square() {
        // Black rook on f8 covers f1; queenside is still fine.
        assert_eq!(castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["e1c1"]);
    }

    #[test]
    fn queenside_b_file_may_be_attacked_but_not_occupied() {
        // b1 attacked by the rook on b8 does not matter.
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1"), vec!["e1c1"]);
        // A knight on b1 blocks.
        assert!(castles("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").is_empty());
    }

    #[test]
    fn missing_right_or_rook_prevents_castling() {
        assert!(castles("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1").is_empty());
    }

    #[test]
    fn rook_corners_map_to_rights() {
        assert_eq!(castling_right_for_rook_square(0), CASTLE_LIGHT_QUEENSIDE);
        assert_eq!(castling_right_for_rook_square(63), CASTLE_DARK_KINGSIDE);
        assert_eq!(castling_right_for_rook_square(27), 0);
    }
}
