//! FEN-to-Board parser.
//!
//! Reads the piece placement field and the optional side-to-move field.
//! Castling, en-passant and move counters have no meaning for this rule set;
//! if present they are accepted and ignored so full FEN strings still load.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> ChessResult<(Board, Color)> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFENstringForm("missing board layout".to_owned()))?;
    let board = parse_board(board_part)?;

    let side_to_move = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::Light,
    };

    if parts.count() > 4 {
        return Err(ChessErrors::InvalidFENstringForm(
            "FEN has extra trailing fields".to_owned(),
        ));
    }

    Ok((board, side_to_move))
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidFENstringForm(format!(
            "board layout must contain 8 ranks, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0 on screen.
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENtoken(ch));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFENtoken(ch))?;
            let square = Square::from_index(row * 8 + col)
                .filter(|_| col < 8)
                .ok_or_else(|| {
                    ChessErrors::InvalidFENstringForm(format!("rank '{row_str}' has too many files"))
                })?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidFENstringForm(format!(
                "rank '{row_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFENstringForm(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let owner = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(owner, kind))
}
