//! Environment settings.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;

/// Reward returned for an illegal or malformed move request.
pub const DEFAULT_ILLEGAL_MOVE_REWARD: f32 = -1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    /// Reward for a rejected move. The episode also ends.
    pub illegal_move_reward: f32,
    /// Truncate the episode after this many accepted plies.
    pub max_plies: Option<u16>,
    /// Position `reset` starts from; `None` means the standard start.
    pub start_fen: Option<String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            illegal_move_reward: DEFAULT_ILLEGAL_MOVE_REWARD,
            max_plies: None,
            start_fen: None,
        }
    }
}

impl EnvConfig {
    pub fn start_fen(&self) -> &str {
        self.start_fen.as_deref().unwrap_or(STARTING_POSITION_FEN)
    }
}
