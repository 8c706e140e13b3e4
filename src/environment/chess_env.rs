//! Reset/step/observe facade over the rules engine.
//!
//! `ChessEnv` owns the current `GameState`, the `GameHistory` used for
//! repetition draws and the cached `GameStatus`. Every call to `step` either
//! advances the game by exactly one legal ply or leaves all three untouched.

use log::{debug, info, warn};

use crate::environment::env_config::EnvConfig;
use crate::environment::observation::Observation;
use crate::environment::step_result::{EpisodeEnd, StepInfo, StepResult};
use crate::errors::{FenError, ParseMoveError};
use crate::game_state::chess_types::Color;
use crate::game_state::game_history::GameHistory;
use crate::game_state::game_state::GameState;
use crate::game_status::terminal_detector::{game_status, GameStatus};
use crate::move_generation::legal_move_generator::{legal_moves, LegalMoveGenerator};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::utils::long_algebraic::{parse_move_identifier, MoveIdentifier};
use crate::utils::render_game_state::{render_ascii, render_unicode};

#[derive(Debug, Clone)]
pub struct ChessEnv {
    config: EnvConfig,
    start: GameState,
    state: GameState,
    history: GameHistory,
    status: GameStatus,
    truncated: bool,
}

impl ChessEnv {
    /// Environment at the standard starting position with default settings.
    pub fn new() -> Self {
        let start = GameState::new_game();
        Self::from_parts(EnvConfig::default(), start)
    }

    /// Fails only if `config.start_fen` is not a valid position.
    pub fn with_config(config: EnvConfig) -> Result<Self, FenError> {
        let start = GameState::from_fen(config.start_fen())?;
        Ok(Self::from_parts(config, start))
    }

    fn from_parts(config: EnvConfig, start: GameState) -> Self {
        let history = GameHistory::starting_from(&start);
        let status = game_status(&start, &history);
        Self {
            config,
            state: start.clone(),
            start,
            history,
            status,
            truncated: false,
        }
    }

    /// Back to the configured start position with an empty history.
    pub fn reset(&mut self) -> Observation {
        self.state = self.start.clone();
        self.history = GameHistory::starting_from(&self.state);
        self.status = game_status(&self.state, &self.history);
        self.truncated = false;
        debug!("reset to {}", self.state.get_fen());
        self.observe()
    }

    pub fn observe(&self) -> Observation {
        Observation::encode(&self.state)
    }

    /// Legal moves of the current position as long algebraic identifiers.
    pub fn legal_actions(&self) -> Vec<String> {
        self.legal_moves().iter().map(Move::to_string).collect()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_done() {
            return Vec::new();
        }
        legal_moves(&self.state)
    }

    /// Syntactic check of an action, for callers that want to reject bad
    /// input before calling `step`.
    pub fn parse_action(&self, action: &str) -> Result<MoveIdentifier, ParseMoveError> {
        parse_move_identifier(action)
    }

    /// Play one ply.
    ///
    /// Rejected requests (unparsable or not legal here) end the episode with
    /// `illegal_move_reward` and leave the game untouched, so the caller may
    /// still `reset` or retry.
    pub fn step(&mut self, action: &str) -> StepResult {
        if self.is_done() {
            return self.finished_result(EpisodeEnd::GameOver, format!("episode already over, ignored {action:?}"));
        }

        let identifier = match parse_move_identifier(action) {
            Ok(identifier) => identifier,
            Err(err) => return self.reject(EpisodeEnd::MalformedMove, err.to_string()),
        };

        let chosen = LegalMoveGenerator
            .generate_legal_moves(&self.state)
            .into_iter()
            .find(|generated| identifier.matches(generated.mv));
        let Some(chosen) = chosen else {
            let message = format!("{identifier} is not legal in {}", self.state.get_fen());
            return self.reject(EpisodeEnd::IllegalMove, message);
        };

        self.state = chosen.game_after_move;
        self.history.record(chosen.mv, &self.state);
        self.status = game_status(&self.state, &self.history);
        debug!("ply {}: {} -> {}", self.history.ply_count(), chosen.mv, self.status.reason_code());

        let mut info = StepInfo {
            played: Some(chosen.mv.to_string()),
            ..StepInfo::default()
        };

        if let Some(reason) = EpisodeEnd::from_status(self.status) {
            info.reason = Some(reason);
            info.result = Some(self.status.result_string());
            info!("episode over after {} plies: {}", self.history.ply_count(), self.status);
        } else if self.ply_limit_reached() {
            self.truncated = true;
            info.reason = Some(EpisodeEnd::MaxPlies);
            info!("episode truncated after {} plies", self.history.ply_count());
        }

        StepResult {
            observation: self.observe(),
            reward: outcome_reward(self.status),
            done: self.is_done(),
            info,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status.is_terminal() || self.truncated
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Rank-by-rank text board, rank 8 first.
    pub fn render(&self) -> String {
        render_ascii(&self.state)
    }

    pub fn render_unicode(&self) -> String {
        render_unicode(&self.state)
    }

    fn ply_limit_reached(&self) -> bool {
        self.config
            .max_plies
            .is_some_and(|limit| self.history.ply_count() >= usize::from(limit))
    }

    fn reject(&self, reason: EpisodeEnd, message: String) -> StepResult {
        warn!("rejected move request ({reason}): {message}");
        StepResult {
            observation: self.observe(),
            reward: self.config.illegal_move_reward,
            done: true,
            info: StepInfo {
                reason: Some(reason),
                message: Some(message),
                ..StepInfo::default()
            },
        }
    }

    fn finished_result(&self, reason: EpisodeEnd, message: String) -> StepResult {
        debug!("{message}");
        let result = self.status.is_terminal().then(|| self.status.result_string());
        StepResult {
            observation: self.observe(),
            reward: 0.0,
            done: true,
            info: StepInfo {
                reason: Some(reason),
                result,
                message: Some(message),
                ..StepInfo::default()
            },
        }
    }
}

impl Default for ChessEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// +1 for a Light win, -1 for a Dark win, 0 otherwise.
pub fn outcome_reward(status: GameStatus) -> f32 {
    match status.winner() {
        Some(Color::Light) => 1.0,
        Some(Color::Dark) => -1.0,
        None => 0.0,
    }
}
