use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// A legal move together with the state it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub game_after_move: GameState,
}

/// Source of legal moves. Perft and other tree walkers are generic over it.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}
