//! Errors used at the fallible edges of the crate.
//!
//! The legality engine itself is total and answers with `bool`; only text
//! parsing (squares, glyphs, FEN, terminal commands) can fail. `ChessErrors`
//! is the single error type for those paths so callers can match on it or
//! print it directly.

use thiserror::Error;

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A single character used during algebraic parsing was invalid.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// An algebraic square string did not have the `<file><rank>` form.
    #[error("invalid algebraic square '{0}'")]
    InvalidAlgebraicString(String),

    /// A character is not one of the twelve piece glyphs.
    #[error("'{0}' is not a piece glyph")]
    InvalidPieceGlyph(char),

    /// Found an unexpected token while parsing a FEN placement.
    #[error("invalid FEN token '{0}'")]
    InvalidFENtoken(char),

    /// FEN string had malformed structure.
    #[error("malformed FEN: {0}")]
    InvalidFENstringForm(String),

    /// A terminal command could not be understood.
    #[error("unrecognized command '{0}'")]
    InvalidCommand(String),
}
