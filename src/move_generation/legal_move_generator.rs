//! Full legal move generation pipeline.
//!
//! Runs the piece-wise pseudo-legal generators, applies each candidate and
//! drops those that leave the mover's own king attacked. Output order is
//! fixed: pawns, knights, bishops, rooks, queens, king steps, castling, each
//! by ascending origin square.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_castling::generate_castling_moves;
use crate::move_generation::legal_moves_leapers::{generate_king_steps, generate_knight_moves};
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::generate_slider_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        pseudo_legal_moves(game_state)
            .into_iter()
            .filter_map(|mv| {
                legal_successor(game_state, mv).map(|game_after_move| GeneratedMove { mv, game_after_move })
            })
            .collect()
    }
}

/// Moves that follow each piece's movement rules, ignoring self-check.
pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut pseudo = Vec::<Move>::with_capacity(128);

    generate_pawn_moves(game_state, &mut pseudo);
    generate_knight_moves(game_state, &mut pseudo);
    generate_slider_moves(game_state, &mut pseudo);
    generate_king_steps(game_state, &mut pseudo);
    generate_castling_moves(game_state, &mut pseudo);

    pseudo
}

/// All legal moves for the side to move.
pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    pseudo_legal_moves(game_state)
        .into_iter()
        .filter(|mv| is_legal_candidate(game_state, *mv))
        .collect()
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(game_state: &GameState) -> bool {
    pseudo_legal_moves(game_state)
        .into_iter()
        .any(|mv| is_legal_candidate(game_state, mv))
}

#[inline]
fn is_legal_candidate(game_state: &GameState, mv: Move) -> bool {
    legal_successor(game_state, mv).is_some()
}

/// State after a pseudo-legal move, or `None` if it leaves the mover's king
/// attacked.
fn legal_successor(game_state: &GameState, mv: Move) -> Option<GameState> {
    let next = make_move(game_state, mv);
    (!is_king_in_check(&next, game_state.side_to_move)).then_some(next)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{has_legal_move, legal_moves, LegalMoveGenerator};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_history::GameHistory;
    use crate::game_state::game_state::GameState;
    use crate::game_status::terminal_detector::{game_status, GameStatus};
    use crate::move_generation::legal_move_apply::{apply_move, make_move};
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::move_generation::move_generator::MoveGenerator;

    const BACK_RANKS: u64 = 0xFF00_0000_0000_00FF;

    fn assert_board_consistent(game: &GameState) {
        let mut seen = 0u64;
        for color in ALL_COLORS {
            for kind in ALL_PIECE_KINDS {
                let bb = game.bitboard(color, kind);
                assert_eq!(seen & bb, 0, "two pieces share a square in {}", game.get_fen());
                seen |= bb;
            }
            assert_eq!(
                game.bitboard(color, PieceKind::King).count_ones(),
                1,
                "{color:?} must have one king in {}",
                game.get_fen()
            );
            assert_eq!(
                game.bitboard(color, PieceKind::Pawn) & BACK_RANKS,
                0,
                "pawn on a back rank in {}",
                game.get_fen()
            );
        }
        assert_eq!(seen, game.occupancy(), "occupancy cache out of date in {}", game.get_fen());
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let game = GameState::new_game();
        let moves = legal_moves(&game);
        assert_eq!(moves.len(), 20);
        assert_eq!(LegalMoveGenerator.generate_legal_moves(&game).len(), 20);
    }

    #[test]
    fn generation_is_deterministic_and_duplicate_free() {
        let game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let first = legal_moves(&game);
        let second = legal_moves(&game);
        assert_eq!(first, second);
        let unique: HashSet<_> = first.iter().copied().collect();
        assert_eq!(unique.len(), first.len());
        assert_eq!(first.len(), 48);
    }

    #[test]
    fn no_generated_move_leaves_own_king_in_check() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        ] {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            for mv in legal_moves(&game) {
                let next = make_move(&game, mv);
                assert!(!is_king_in_check(&next, game.side_to_move()), "{mv} leaves king in check in {fen}");
            }
        }
    }

    #[test]
    fn en_passant_exposing_king_on_rank_is_illegal() {
        // Capturing d5xe6 would clear the fifth rank between the king and rook.
        let game = GameState::from_fen("8/8/8/K2Pp2r/8/8/8/4k3 w - e6 0 1").expect("FEN should parse");
        assert!(legal_moves(&game).iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn checkmated_side_has_no_moves() {
        let game = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        assert!(legal_moves(&game).is_empty());
        assert!(!has_legal_move(&game));
        assert!(has_legal_move(&GameState::new_game()));
    }

    #[test]
    fn seeded_random_games_keep_board_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5EED_CAFE);

        for _game in 0..24 {
            let mut game = GameState::new_game();
            let mut history = GameHistory::starting_from(&game);

            for _ply in 0..160 {
                assert_board_consistent(&game);

                let moves = legal_moves(&game);
                let status = game_status(&game, &history);
                assert_eq!(
                    moves.is_empty(),
                    matches!(status, GameStatus::Checkmate { .. } | GameStatus::Stalemate),
                    "status {status:?} disagrees with move list in {}",
                    game.get_fen()
                );

                for mv in &moves {
                    let next = apply_move(&game, *mv).expect("generated move should apply");
                    assert!(
                        !is_king_in_check(&next, game.side_to_move()),
                        "{mv} leaves king in check in {}",
                        game.get_fen()
                    );
                }

                if status.is_terminal() {
                    break;
                }
                let Some(mv) = moves.choose(&mut rng).copied() else {
                    break;
                };
                game = apply_move(&game, mv).expect("chosen move should apply");
                history.record(mv, &game);
            }
        }
    }
}
