//! Ordered record of a game from its starting position to the current ply.
//!
//! Stores one `PositionSignature` per reached position (the start included)
//! and the moves that connect them. Owned by the environment and cleared on
//! reset.

use crate::game_state::game_state::GameState;
use crate::game_state::position_signature::PositionSignature;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameHistory {
    positions: Vec<PositionSignature>,
    moves: Vec<Move>,
}

impl GameHistory {
    /// History containing only the given starting position.
    pub fn starting_from(game_state: &GameState) -> Self {
        Self {
            positions: vec![game_state.position_signature()],
            moves: Vec::new(),
        }
    }

    /// Append a played move and the position it produced.
    pub fn record(&mut self, mv: Move, game_after_move: &GameState) {
        self.moves.push(mv);
        self.positions.push(game_after_move.position_signature());
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.moves.clear();
    }

    /// Number of times `signature` has been reached.
    pub fn repetition_count(&self, signature: &PositionSignature) -> usize {
        self.positions.iter().filter(|p| *p == signature).count()
    }

    pub fn positions(&self) -> &[PositionSignature] {
        &self.positions
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Plies played since the starting position.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::GameHistory;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::utils::long_algebraic::find_legal_move;

    #[test]
    fn knight_shuffle_repeats_start_position() {
        let start = GameState::new_game();
        let mut history = GameHistory::starting_from(&start);
        let mut state = start.clone();

        for lan in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            let mv = find_legal_move(&state, lan).expect("shuffle move should be legal");
            state = apply_move(&state, mv).expect("legal move should apply");
            history.record(mv, &state);
        }

        assert_eq!(history.ply_count(), 4);
        assert_eq!(history.positions().len(), 5);
        assert_eq!(history.repetition_count(&start.position_signature()), 2);
        assert_eq!(state.position_signature(), start.position_signature());

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.last_move(), None);
    }
}
