//! Canonical chess-rule constants.
//!
//! Stores the standard starting arrangement used to initialize a session,
//! both as a FEN placement string and as the back-rank piece order.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank order from column 0 to column 7 for both sides.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Default per-player clock allowance, in seconds.
pub const DEFAULT_CLOCK_SECONDS: i64 = 300;
