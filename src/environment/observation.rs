//! Board-to-tensor encoding.
//!
//! The observation is an 8x8x12 grid of 0/1 values indexed
//! `[rank][file][plane]`. Planes are Light pawn, knight, bishop, rook, queen,
//! king, then the same six for Dark. The plane order is part of the external
//! contract and must never change.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub const BOARD_SIZE: usize = 8;
pub const PLANE_COUNT: usize = 12;
pub const OBSERVATION_LEN: usize = BOARD_SIZE * BOARD_SIZE * PLANE_COUNT;

/// Plane index (`0..12`) for a colored piece.
#[inline]
pub const fn plane_index(piece: Piece) -> usize {
    piece.color.index() * 6 + piece.kind.index()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Observation {
    planes: [[[u8; PLANE_COUNT]; BOARD_SIZE]; BOARD_SIZE],
}

impl Observation {
    pub fn encode(game_state: &GameState) -> Self {
        let mut planes = [[[0u8; PLANE_COUNT]; BOARD_SIZE]; BOARD_SIZE];

        for color in ALL_COLORS {
            for kind in ALL_PIECE_KINDS {
                let plane = plane_index(Piece::new(kind, color));
                let mut bb = game_state.bitboard(color, kind);
                while bb != 0 {
                    let sq = bb.trailing_zeros() as Square;
                    planes[square_rank(sq) as usize][square_file(sq) as usize][plane] = 1;
                    bb &= bb - 1;
                }
            }
        }

        Self { planes }
    }

    /// Cell value at `(rank, file, plane)`, all zero-based.
    #[inline]
    pub fn get(&self, rank: usize, file: usize, plane: usize) -> u8 {
        self.planes[rank][file][plane]
    }

    /// The twelve plane values of one square.
    #[inline]
    pub fn square(&self, square: Square) -> &[u8; PLANE_COUNT] {
        &self.planes[square_rank(square) as usize][square_file(square) as usize]
    }

    pub fn as_array(&self) -> &[[[u8; PLANE_COUNT]; BOARD_SIZE]; BOARD_SIZE] {
        &self.planes
    }

    /// Row-major flattening: rank, then file, then plane.
    pub fn to_flat_vec(&self) -> Vec<f32> {
        self.planes
            .iter()
            .flat_map(|rank| rank.iter())
            .flat_map(|cell| cell.iter())
            .map(|&v| f32::from(v))
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.planes
            .iter()
            .flat_map(|rank| rank.iter())
            .filter(|cell| cell.iter().any(|&v| v != 0))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn plane_mapping_is_total_and_ordered() {
        let mut seen = [false; PLANE_COUNT];
        for (expected, piece) in [
            Piece::new(PieceKind::Pawn, Color::Light),
            Piece::new(PieceKind::Knight, Color::Light),
            Piece::new(PieceKind::Bishop, Color::Light),
            Piece::new(PieceKind::Rook, Color::Light),
            Piece::new(PieceKind::Queen, Color::Light),
            Piece::new(PieceKind::King, Color::Light),
            Piece::new(PieceKind::Pawn, Color::Dark),
            Piece::new(PieceKind::Knight, Color::Dark),
            Piece::new(PieceKind::Bishop, Color::Dark),
            Piece::new(PieceKind::Rook, Color::Dark),
            Piece::new(PieceKind::Queen, Color::Dark),
            Piece::new(PieceKind::King, Color::Dark),
        ]
        .into_iter()
        .enumerate()
        {
            assert_eq!(plane_index(piece), expected);
            seen[expected] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn encoding_is_idempotent_and_one_hot() {
        let game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let first = Observation::encode(&game);
        let second = Observation::encode(&game);
        assert_eq!(first, second);

        for sq in 0..64u8 {
            let set: u8 = first.square(sq).iter().sum();
            match game.piece_at(sq) {
                Some(piece) => {
                    assert_eq!(set, 1, "square {sq}");
                    assert_eq!(first.square(sq)[plane_index(piece)], 1);
                }
                None => assert_eq!(set, 0, "square {sq}"),
            }
        }
        assert_eq!(first.occupied_count(), game.pieces().count());
    }

    #[test]
    fn start_position_layout_matches_rank_file_indexing() {
        let obs = Observation::encode(&GameState::new_game());
        // White king on e1 -> rank 0, file 4, plane 5.
        assert_eq!(obs.get(0, 4, 5), 1);
        // Black queen on d8 -> rank 7, file 3, plane 10.
        assert_eq!(obs.get(7, 3, 10), 1);
        // White pawns fill rank 1 on plane 0.
        assert!((0..8).all(|file| obs.get(1, file, 0) == 1));

        let flat = obs.to_flat_vec();
        assert_eq!(flat.len(), OBSERVATION_LEN);
        assert_eq!(flat[4 * PLANE_COUNT + 5], 1.0);
        assert_eq!(flat.iter().filter(|v| **v == 1.0).count(), 32);
    }
}
