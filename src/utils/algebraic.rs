//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`.
//! Rank 8 is row 0 and file `a` is column 0.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let malformed = || ChessErrors::InvalidAlgebraicString(square.to_owned());
    let mut chars = square.trim().chars();

    let file = chars.next().ok_or_else(malformed)?;
    if !('a'..='h').contains(&file.to_ascii_lowercase()) {
        return Err(ChessErrors::InvalidAlgebraicChar(file));
    }

    let rank = chars.next().ok_or_else(malformed)?;
    if chars.next().is_some() {
        return Err(malformed());
    }
    if !('1'..='8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank));
    }

    let col = file.to_ascii_lowercase() as u8 - b'a';
    let row = b'8' - rank as u8;
    Square::new(row, col).ok_or_else(malformed)
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}
