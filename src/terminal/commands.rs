//! Terminal command grammar.
//!
//! A lone square is a click, two squares (`e2 e4` or `e2e4`) are a direct
//! move attempt.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click(Square),
    Move(Square, Square),
    Moves(Square),
    Board,
    Clock,
    Fen,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> ChessResult<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        ["board"] => Ok(Command::Board),
        ["clock"] => Ok(Command::Clock),
        ["fen"] => Ok(Command::Fen),
        ["help"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["moves", square] => Ok(Command::Moves(algebraic_to_square(square)?)),
        [from, to] => Ok(Command::Move(
            algebraic_to_square(from)?,
            algebraic_to_square(to)?,
        )),
        [token] if token.len() == 4 && token.is_ascii() => Ok(Command::Move(
            algebraic_to_square(&token[..2])?,
            algebraic_to_square(&token[2..])?,
        )),
        [token] if token.len() == 2 => Ok(Command::Click(algebraic_to_square(token)?)),
        _ => Err(ChessErrors::InvalidCommand(line.trim().to_owned())),
    }
}
