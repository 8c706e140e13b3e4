//! FEN-to-GameState parser.
//!
//! Builds a fully-populated state from a Forsyth-Edwards Notation string:
//! piece bitboards, rights, clocks and occupancies. Used to set up start
//! positions and test fixtures.

use crate::errors::FenError;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_pawn::en_passant_victim_square;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side to move"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en-passant square"))?;
    // Clocks are optional, as in EPD-style position strings.
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = parse_counter("halfmove clock", halfmove_part)?;
    game_state.fullmove_number = parse_counter("fullmove number", fullmove_part)?.max(1);

    game_state.recalc_occupancy();
    validate_kings(&game_state)?;
    validate_en_passant(&game_state, en_passant_part)?;

    let waiting = game_state.side_to_move.opposite();
    if is_king_in_check(&game_state, waiting) {
        return Err(FenError::OpponentInCheck(waiting));
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidBoard("board layout must contain 8 ranks".to_owned()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidBoard(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(FenError::InvalidBoard(format!("rank {} overflows 8 files", board_rank + 1)));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| FenError::InvalidBoard(format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(FenError::InvalidBoard(format!("rank {} overflows 8 files", board_rank + 1)));
            }
            if piece.kind == PieceKind::Pawn && (board_rank == 0 || board_rank == 7) {
                return Err(FenError::InvalidBoard("pawn on first or last rank".to_owned()));
            }

            let sq = make_square(file, board_rank);
            game_state.pieces[piece.color.index()][piece.kind.index()] |= square_bit(sq);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::InvalidBoard(format!("rank {} does not sum to 8 files", board_rank + 1)));
        }
    }

    Ok(())
}

fn validate_kings(game_state: &GameState) -> Result<(), FenError> {
    for color in ALL_COLORS {
        if game_state.bitboard(color, PieceKind::King).count_ones() != 1 {
            return Err(FenError::InvalidBoard(format!(
                "expected exactly one {color:?} king"
            )));
        }
    }
    Ok(())
}

// The target must be the square a pawn of the waiting side just skipped:
// on that side's third rank, empty, with the pushed pawn directly behind it
// and its starting square vacated.
fn validate_en_passant(game_state: &GameState, en_passant_part: &str) -> Result<(), FenError> {
    let Some(target) = game_state.en_passant_square else {
        return Ok(());
    };

    let mover = game_state.side_to_move;
    let pusher = mover.opposite();
    let expected_rank = match mover {
        Color::Light => 5,
        Color::Dark => 2,
    };
    let pushed_pawn = en_passant_victim_square(mover, target);
    let vacated_start = match mover {
        Color::Light => target + 8,
        Color::Dark => target - 8,
    };

    let valid = square_rank(target) == expected_rank
        && game_state.occupancy_all & square_bit(target) == 0
        && game_state.occupancy_all & square_bit(vacated_start) == 0
        && game_state.bitboard(pusher, PieceKind::Pawn) & square_bit(pushed_pawn) != 0;

    if valid {
        Ok(())
    } else {
        Err(FenError::InvalidEnPassant(en_passant_part.to_owned()))
    }
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(FenError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(FenError::InvalidCastling(ch)),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .ok_or_else(|| FenError::InvalidEnPassant(en_passant_part.to_owned()))?;
    let rank = square_rank(square);
    if rank != 2 && rank != 5 {
        return Err(FenError::InvalidEnPassant(en_passant_part.to_owned()));
    }

    Ok(Some(square))
}

fn parse_counter(field: &'static str, value: &str) -> Result<u16, FenError> {
    value.parse::<u16>().map_err(|_| FenError::InvalidCounter {
        field,
        value: value.to_owned(),
    })
}
