//! Crate root module declarations for the Plum Gym chess environment.
//!
//! The crate is a self-contained chess rules engine (board state, legal move
//! generation, move application, terminal detection) wrapped in a small
//! reinforcement-learning style environment that exposes reset/step/observe
//! over a fixed-shape board tensor.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_history;
    pub mod game_state;
    pub mod position_signature;
    pub mod zobrist;
}

pub mod moves {
    pub mod leaper_attacks;
    pub mod move_descriptions;
    pub mod pawn_attacks;
    pub mod slider_attacks;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_castling;
    pub mod legal_moves_leapers;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod move_generator;
    pub mod perft;
}

pub mod game_status {
    pub mod insufficient_material;
    pub mod terminal_detector;
}

pub mod environment {
    pub mod chess_env;
    pub mod env_config;
    pub mod observation;
    pub mod step_result;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use environment::chess_env::ChessEnv;
pub use environment::env_config::EnvConfig;
pub use environment::observation::Observation;
pub use environment::step_result::{EpisodeEnd, StepInfo, StepResult};
pub use game_state::chess_types::{Color, Piece, PieceKind, Square};
pub use game_state::game_history::GameHistory;
pub use game_state::game_state::GameState;
pub use game_status::terminal_detector::{game_status, DrawReason, GameStatus};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_generator::legal_moves;
pub use moves::move_descriptions::Move;
