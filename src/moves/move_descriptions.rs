//! Packed move representation.
//!
//! A `Move` carries everything the applier needs so nothing has to be
//! recomputed from the board: origin, destination, moved piece, captured
//! piece, promotion choice and the special-move flags.
//!
//! Bit layout (low to high): from (6) | to (6) | moved (3) | captured (3) |
//! promotion (3) | capture, double push, en passant, castling flags.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

const FROM_SHIFT: u64 = 0;
const TO_SHIFT: u64 = 6;
const MOVED_PIECE_SHIFT: u64 = 12;
const CAPTURED_PIECE_SHIFT: u64 = 15;
const PROMOTION_PIECE_SHIFT: u64 = 18;

const SQUARE_MASK: u64 = 0x3F;
const PIECE_MASK: u64 = 0x7;
const NO_PIECE_CODE: u64 = 0x7;

pub const FLAG_CAPTURE: u64 = 1u64 << 21;
pub const FLAG_DOUBLE_PAWN_PUSH: u64 = 1u64 << 22;
pub const FLAG_EN_PASSANT: u64 = 1u64 << 23;
pub const FLAG_CASTLING: u64 = 1u64 << 24;

const ALL_FLAGS: u64 = FLAG_CAPTURE | FLAG_DOUBLE_PAWN_PUSH | FLAG_EN_PASSANT | FLAG_CASTLING;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(u64);

impl Move {
    #[inline]
    pub fn new(
        from: Square,
        to: Square,
        moved_piece: PieceKind,
        captured_piece: Option<PieceKind>,
        promotion_piece: Option<PieceKind>,
        flags: u64,
    ) -> Self {
        debug_assert!(from < 64 && to < 64, "move squares must be on the board");
        debug_assert_eq!(flags & !ALL_FLAGS, 0, "unknown move flag bits");

        let mut out = 0u64;
        out |= (from as u64) << FROM_SHIFT;
        out |= (to as u64) << TO_SHIFT;
        out |= piece_code(Some(moved_piece)) << MOVED_PIECE_SHIFT;
        out |= piece_code(captured_piece) << CAPTURED_PIECE_SHIFT;
        out |= piece_code(promotion_piece) << PROMOTION_PIECE_SHIFT;
        out |= flags & ALL_FLAGS;
        Self(out)
    }

    #[inline]
    pub fn origin(self) -> Square {
        ((self.0 >> FROM_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub fn destination(self) -> Square {
        ((self.0 >> TO_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub fn moved_piece(self) -> PieceKind {
        let code = (self.0 >> MOVED_PIECE_SHIFT) & PIECE_MASK;
        debug_assert_ne!(code, NO_PIECE_CODE, "moved piece is always encoded");
        piece_from_code(code).unwrap_or(PieceKind::Pawn)
    }

    #[inline]
    pub fn captured_piece(self) -> Option<PieceKind> {
        piece_from_code((self.0 >> CAPTURED_PIECE_SHIFT) & PIECE_MASK)
    }

    #[inline]
    pub fn promotion_piece(self) -> Option<PieceKind> {
        piece_from_code((self.0 >> PROMOTION_PIECE_SHIFT) & PIECE_MASK)
    }

    #[inline]
    pub fn is_capture(self) -> bool {
        self.0 & FLAG_CAPTURE != 0
    }

    #[inline]
    pub fn is_double_pawn_push(self) -> bool {
        self.0 & FLAG_DOUBLE_PAWN_PUSH != 0
    }

    #[inline]
    pub fn is_en_passant(self) -> bool {
        self.0 & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub fn is_castling(self) -> bool {
        self.0 & FLAG_CASTLING != 0
    }

    #[inline]
    pub fn is_promotion(self) -> bool {
        self.promotion_piece().is_some()
    }

    /// Whether the move resets the halfmove clock.
    #[inline]
    pub fn is_zeroing(self) -> bool {
        self.is_capture() || self.moved_piece() == PieceKind::Pawn
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[inline]
fn piece_code(piece: Option<PieceKind>) -> u64 {
    piece.map(|p| p.index() as u64).unwrap_or(NO_PIECE_CODE)
}

#[inline]
fn piece_from_code(code: u64) -> Option<PieceKind> {
    PieceKind::from_index(code as usize)
}

/// Long algebraic form, e.g. `e2e4` or `a7a8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.origin()),
            square_to_algebraic(self.destination())
        )?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Move")
            .field("lan", &self.to_string())
            .field("moved", &self.moved_piece())
            .field("captured", &self.captured_piece())
            .field("flags", &(self.0 & ALL_FLAGS))
            .finish()
    }
}
