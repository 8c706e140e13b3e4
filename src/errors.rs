//! Error types for the rules engine and environment.
//!
//! Only caller-input problems are represented here. Broken internal invariants
//! are programming faults and are guarded with debug assertions instead.

use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::Move;

/// A move handed to the applier that is not legal in the given position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("move {attempted} is not legal in position {fen}")]
pub struct InvalidMoveError {
    pub attempted: Move,
    pub fen: String,
}

/// A move identifier that cannot be read as `<from><to>[promotion]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("move identifier must be 4 or 5 ASCII characters, got {0:?}")]
    InvalidLength(String),

    #[error("invalid square {square:?} in move identifier {identifier:?}")]
    InvalidSquare { identifier: String, square: String },

    #[error("invalid promotion piece {piece:?} in move identifier {identifier:?}")]
    InvalidPromotion { identifier: String, piece: char },
}

/// A malformed Forsyth-Edwards Notation string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("missing FEN field: {0}")]
    MissingField(&'static str),

    #[error("FEN has extra trailing fields")]
    TrailingFields,

    #[error("invalid board layout: {0}")]
    InvalidBoard(String),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character: {0}")]
    InvalidCastling(char),

    #[error("invalid en-passant square: {0}")]
    InvalidEnPassant(String),

    #[error("invalid {field}: {value}")]
    InvalidCounter { field: &'static str, value: String },

    #[error("{0:?} king is in check but it is not {0:?}'s turn")]
    OpponentInCheck(Color),
}
