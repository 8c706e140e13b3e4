//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting position and the thresholds
//! used by the draw rules.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock value at which the 50-move rule ends the game.
pub const FIFTY_MOVE_RULE_PLIES: u16 = 100;

/// Occurrences of one position that end the game by repetition.
pub const REPETITION_DRAW_COUNT: usize = 3;
