//! Result types returned by `ChessEnv::step`.

use std::collections::BTreeMap;
use std::fmt;

use crate::environment::observation::Observation;
use crate::game_status::terminal_detector::{DrawReason, GameStatus};

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpisodeEnd {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
    /// Parsable identifier that is not a legal move here.
    IllegalMove,
    /// Identifier that could not be parsed at all.
    MalformedMove,
    /// `EnvConfig::max_plies` reached.
    MaxPlies,
    /// `step` called after the episode had already ended.
    GameOver,
}

impl EpisodeEnd {
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { .. } => Some(EpisodeEnd::Checkmate),
            GameStatus::Stalemate => Some(EpisodeEnd::Stalemate),
            GameStatus::Draw(DrawReason::FiftyMoveRule) => Some(EpisodeEnd::FiftyMoveRule),
            GameStatus::Draw(DrawReason::ThreefoldRepetition) => Some(EpisodeEnd::ThreefoldRepetition),
            GameStatus::Draw(DrawReason::InsufficientMaterial) => Some(EpisodeEnd::InsufficientMaterial),
        }
    }

    /// Stable snake_case reason code.
    pub fn code(self) -> &'static str {
        match self {
            EpisodeEnd::Checkmate => "checkmate",
            EpisodeEnd::Stalemate => "stalemate",
            EpisodeEnd::FiftyMoveRule => "fifty_move_rule",
            EpisodeEnd::ThreefoldRepetition => "threefold_repetition",
            EpisodeEnd::InsufficientMaterial => "insufficient_material",
            EpisodeEnd::IllegalMove => "illegal_move",
            EpisodeEnd::MalformedMove => "malformed_move",
            EpisodeEnd::MaxPlies => "max_plies",
            EpisodeEnd::GameOver => "game_over",
        }
    }

    /// Whether the episode ended because the request itself was rejected.
    pub fn is_rejection(self) -> bool {
        matches!(self, EpisodeEnd::IllegalMove | EpisodeEnd::MalformedMove)
    }
}

impl fmt::Display for EpisodeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Metadata attached to a step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Set whenever the episode is over.
    pub reason: Option<EpisodeEnd>,
    /// `1-0`, `0-1` or `1/2-1/2` once the game itself has a result.
    pub result: Option<&'static str>,
    /// The move that was played, in long algebraic form.
    pub played: Option<String>,
    /// Human-readable explanation for rejected requests.
    pub message: Option<String>,
}

impl StepInfo {
    /// Flat string map view, for loggers and language bindings.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        if let Some(reason) = self.reason {
            map.insert("reason", reason.code().to_owned());
        }
        if let Some(result) = self.result {
            map.insert("result", result.to_owned());
        }
        if let Some(played) = &self.played {
            map.insert("move", played.clone());
        }
        if let Some(message) = &self.message {
            map.insert("message", message.clone());
        }
        map
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f32,
    pub done: bool,
    pub info: StepInfo,
}

#[cfg(test)]
mod tests {
    use super::{EpisodeEnd, StepInfo};
    use crate::game_state::chess_types::Color;
    use crate::game_status::terminal_detector::{DrawReason, GameStatus};

    #[test]
    fn status_maps_to_episode_end() {
        assert_eq!(EpisodeEnd::from_status(GameStatus::Ongoing), None);
        assert_eq!(
            EpisodeEnd::from_status(GameStatus::Checkmate { winner: Color::Light }),
            Some(EpisodeEnd::Checkmate)
        );
        assert_eq!(
            EpisodeEnd::from_status(GameStatus::Draw(DrawReason::ThreefoldRepetition)),
            Some(EpisodeEnd::ThreefoldRepetition)
        );
    }

    #[test]
    fn info_map_only_contains_present_fields() {
        let info = StepInfo {
            reason: Some(EpisodeEnd::IllegalMove),
            message: Some("e2e5 is not legal".to_owned()),
            ..StepInfo::default()
        };
        let map = info.to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["reason"], "illegal_move");
        assert!(EpisodeEnd::MalformedMove.is_rejection());
        assert!(!EpisodeEnd::Checkmate.is_rejection());
        assert!(StepInfo::default().to_map().is_empty());
    }
}
