//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and internal
//! square indices.

use crate::game_state::chess_types::{make_square, square_file, square_rank, Square};

/// Parse an algebraic square such as `e4`. Returns `None` for anything else.
#[inline]
pub fn algebraic_to_square(square: &str) -> Option<Square> {
    let &[file, rank] = square.as_bytes() else {
        return None;
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    Some(make_square(file - b'a', rank - b'1'))
}

/// Algebraic name of a square index (`0..=63`).
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    debug_assert!(square < 64, "square index out of bounds: {square}");
    let file_char = char::from(b'a' + square_file(square));
    let rank_char = char::from(b'1' + square_rank(square));
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1"), Some(0));
        assert_eq!(algebraic_to_square("h8"), Some(63));
        assert_eq!(algebraic_to_square("e4"), Some(28));
        assert_eq!(square_to_algebraic(0), "a1");
        assert_eq!(square_to_algebraic(63), "h8");
        for sq in 0..64u8 {
            assert_eq!(algebraic_to_square(&square_to_algebraic(sq)), Some(sq));
        }
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(algebraic_to_square("i1"), None);
        assert_eq!(algebraic_to_square("a9"), None);
        assert_eq!(algebraic_to_square("a"), None);
        assert_eq!(algebraic_to_square("a10"), None);
        assert_eq!(algebraic_to_square("E4"), None);
    }
}
