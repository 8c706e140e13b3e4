//! Perft: exhaustive legal-move tree counts used to validate the generator
//! against published node totals.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn record_leaf(&mut self, mv: &GeneratedMove) {
        self.nodes += 1;
        if mv.mv.is_capture() {
            self.captures += 1;
        }
        if mv.mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.mv.is_castling() {
            self.castles += 1;
        }
        if mv.mv.is_promotion() {
            self.promotions += 1;
        }
    }
}

/// Perft with the crate's legal move generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, game_state, depth)
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, &mv, depth - 1, &mut total);
    }

    total
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    remaining: u8,
    counts: &mut PerftCounts,
) {
    if remaining == 0 {
        counts.record_leaf(mv);
        return;
    }

    for child in generator.generate_legal_moves(&mv.game_after_move) {
        perft_recurse(generator, &child, remaining - 1, counts);
    }
}
