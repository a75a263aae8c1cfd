//! Crate root module declarations for the Plum Chess board.
//!
//! Exposes the board model and session (`game_state`), the per-piece movement
//! rules (`moves`), the legality engine built on them (`move_generation`), the
//! terminal front-end, and text utilities shared by the binary and tests.

pub mod chess_errors;
pub mod config;

pub mod game_state {
    pub mod board;
    pub mod chess_clock;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
}

pub mod terminal {
    pub mod commands;
    pub mod terminal_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
