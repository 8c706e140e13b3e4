//! External move identifiers in long algebraic (UCI-style) notation.
//!
//! An identifier is the origin square, the destination square and an
//! optional lowercase promotion letter: `e2e4`, `e1g1`, `a7a8q`. Parsing is
//! purely syntactic; whether the move is legal is decided by matching against
//! the generator's output.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseMoveError;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveIdentifier {
    pub origin: Square,
    pub destination: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveIdentifier {
    pub fn of(mv: Move) -> Self {
        Self {
            origin: mv.origin(),
            destination: mv.destination(),
            promotion: mv.promotion_piece(),
        }
    }

    #[inline]
    pub fn matches(&self, mv: Move) -> bool {
        mv.origin() == self.origin
            && mv.destination() == self.destination
            && mv.promotion_piece() == self.promotion
    }

    /// First move in `moves` with this identifier.
    pub fn find_in(&self, moves: &[Move]) -> Option<Move> {
        moves.iter().copied().find(|mv| self.matches(*mv))
    }
}

impl FromStr for MoveIdentifier {
    type Err = ParseMoveError;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        parse_move_identifier(identifier)
    }
}

impl fmt::Display for MoveIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.origin),
            square_to_algebraic(self.destination)
        )?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.fen_char())?;
        }
        Ok(())
    }
}

pub fn parse_move_identifier(identifier: &str) -> Result<MoveIdentifier, ParseMoveError> {
    if !identifier.is_ascii() || !(4..=5).contains(&identifier.len()) {
        return Err(ParseMoveError::InvalidLength(identifier.to_owned()));
    }

    let square = |text: &str| {
        algebraic_to_square(text).ok_or_else(|| ParseMoveError::InvalidSquare {
            identifier: identifier.to_owned(),
            square: text.to_owned(),
        })
    };
    let origin = square(&identifier[0..2])?;
    let destination = square(&identifier[2..4])?;

    let promotion = match identifier[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch).ok_or_else(|| ParseMoveError::InvalidPromotion {
            identifier: identifier.to_owned(),
            piece: ch,
        })?),
        None => None,
    };

    Ok(MoveIdentifier {
        origin,
        destination,
        promotion,
    })
}

/// Resolve an identifier against the legal moves of `game_state`.
pub fn find_legal_move(game_state: &GameState, identifier: &str) -> Option<Move> {
    let parsed = parse_move_identifier(identifier).ok()?;
    parsed.find_in(&legal_moves(game_state))
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
