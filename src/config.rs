//! Session configuration.
//!
//! The binary fills this from command-line arguments; library users and tests
//! use `Default`.

use crate::game_state::chess_rules::{DEFAULT_CLOCK_SECONDS, STARTING_POSITION_FEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Allowance for each player, in seconds.
    pub initial_clock_seconds: i64,
    /// Piece placement (and optional side to move) to start from.
    pub starting_fen: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_clock_seconds: DEFAULT_CLOCK_SECONDS,
            starting_fen: STARTING_POSITION_FEN.to_owned(),
        }
    }
}
