//! Game-over detection.
//!
//! Positions with no legal moves are decided first (checkmate or stalemate),
//! whatever the clocks or history say. Otherwise the draw rules are checked
//! in order: insufficient material, the 50-move rule, threefold repetition.

use std::fmt;

use crate::game_state::chess_rules::{FIFTY_MOVE_RULE_PLIES, REPETITION_DRAW_COUNT};
use crate::game_state::chess_types::Color;
use crate::game_state::game_history::GameHistory;
use crate::game_state::game_state::GameState;
use crate::game_status::insufficient_material::has_insufficient_material;
use crate::move_generation::legal_move_generator::has_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }

    #[inline]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// PGN-style result: `1-0`, `0-1`, `1/2-1/2` or `*` while ongoing.
    pub fn result_string(self) -> &'static str {
        match self {
            GameStatus::Ongoing => "*",
            GameStatus::Checkmate { winner: Color::Light } => "1-0",
            GameStatus::Checkmate { winner: Color::Dark } => "0-1",
            GameStatus::Stalemate | GameStatus::Draw(_) => "1/2-1/2",
        }
    }

    /// Stable snake_case code for logs and step metadata.
    pub fn reason_code(self) -> &'static str {
        match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate { .. } => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw(DrawReason::FiftyMoveRule) => "fifty_move_rule",
            GameStatus::Draw(DrawReason::ThreefoldRepetition) => "threefold_repetition",
            GameStatus::Draw(DrawReason::InsufficientMaterial) => "insufficient_material",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(winner) => write!(f, "{} ({winner:?} wins, {})", self.reason_code(), self.result_string()),
            None => write!(f, "{} ({})", self.reason_code(), self.result_string()),
        }
    }
}

/// Status of `game_state`, where `history` holds every position reached so
/// far including `game_state` itself.
pub fn game_status(game_state: &GameState, history: &GameHistory) -> GameStatus {
    if !has_legal_move(game_state) {
        return if game_state.is_in_check() {
            GameStatus::Checkmate {
                winner: game_state.side_to_move().opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }

    if has_insufficient_material(game_state) {
        return GameStatus::Draw(DrawReason::InsufficientMaterial);
    }

    if game_state.halfmove_clock() >= FIFTY_MOVE_RULE_PLIES {
        return GameStatus::Draw(DrawReason::FiftyMoveRule);
    }

    if history.repetition_count(&game_state.position_signature()) >= REPETITION_DRAW_COUNT {
        return GameStatus::Draw(DrawReason::ThreefoldRepetition);
    }

    GameStatus::Ongoing
}

#[cfg(test)]
mod tests {
    use super::{game_status, DrawReason, GameStatus};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_history::GameHistory;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::utils::long_algebraic::find_legal_move;

    fn status_of(fen: &str) -> GameStatus {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        game_status(&game, &GameHistory::starting_from(&game))
    }

    fn play_line(moves: &[&str]) -> (GameState, GameHistory) {
        let mut state = GameState::new_game();
        let mut history = GameHistory::starting_from(&state);
        for lan in moves {
            let mv = find_legal_move(&state, lan).expect("line move should be legal");
            state = apply_move(&state, mv).expect("legal move should apply");
            history.record(mv, &state);
        }
        (state, history)
    }

    #[test]
    fn fools_mate_is_checkmate_for_dark() {
        let (state, history) = play_line(&["f2f3", "e7e5", "g2g4", "d8h4"]);
        let status = game_status(&state, &history);
        assert_eq!(status, GameStatus::Checkmate { winner: Color::Dark });
        assert_eq!(status.result_string(), "0-1");
        assert!(legal_moves(&state).is_empty());
    }

    #[test]
    fn start_position_is_ongoing() {
        let start = GameState::new_game();
        let status = game_status(&start, &GameHistory::starting_from(&start));
        assert_eq!(status, GameStatus::Ongoing);
        assert!(!status.is_terminal());
        assert_eq!(status.result_string(), "*");
    }

    #[test]
    fn stalemate_is_detected() {
        assert_eq!(status_of("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), GameStatus::Stalemate);
    }

    #[test]
    fn mate_outranks_fifty_move_rule() {
        // Back-rank mate delivered with the clock already past 100.
        let status = status_of("R5k1/5ppp/8/8/8/8/8/6K1 b - - 120 80");
        assert_eq!(status, GameStatus::Checkmate { winner: Color::Light });
    }

    #[test]
    fn fifty_move_rule_triggers_at_one_hundred_plies() {
        assert_eq!(
            status_of("4k3/8/8/8/8/8/8/R3K3 w - - 100 80"),
            GameStatus::Draw(DrawReason::FiftyMoveRule)
        );
        assert_eq!(status_of("4k3/8/8/8/8/8/8/R3K3 w - - 99 80"), GameStatus::Ongoing);
    }

    #[test]
    fn insufficient_material_is_a_draw() {
        let status = status_of("4k3/8/8/8/8/8/8/4KB2 w - - 0 1");
        assert_eq!(status, GameStatus::Draw(DrawReason::InsufficientMaterial));
        assert_eq!(status.reason_code(), "insufficient_material");
    }

    #[test]
    fn knight_shuffle_reaches_threefold_repetition() {
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"];
        let (state, history) = play_line(&shuffle[..7]);
        assert_eq!(game_status(&state, &history), GameStatus::Ongoing);

        let (state, history) = play_line(&shuffle);
        assert_eq!(
            game_status(&state, &history),
            GameStatus::Draw(DrawReason::ThreefoldRepetition)
        );
        assert_eq!(state.halfmove_clock(), 8);
    }
}
