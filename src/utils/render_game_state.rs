//! Text board renderers for terminals and logs.
//!
//! Both renderers print rank 8 first, as a player with the Light pieces sees
//! the board. They are diagnostics, not a stable interface.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Plain ASCII grid: FEN letters for pieces, `.` for empty squares.
pub fn render_ascii(game_state: &GameState) -> String {
    let mut lines = Vec::with_capacity(8);

    for rank in (0..8u8).rev() {
        let row: Vec<String> = (0..8u8)
            .map(|file| {
                game_state
                    .piece_at(make_square(file, rank))
                    .map(Piece::fen_char)
                    .unwrap_or('.')
                    .to_string()
            })
            .collect();
        lines.push(row.join(" "));
    }

    lines.join("\n")
}

/// Unicode board with file and rank labels.
pub fn render_unicode(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        let rank_char = char::from(b'1' + rank);
        out.push(rank_char);
        out.push(' ');

        for file in 0..8u8 {
            match game_state.piece_at(make_square(file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
