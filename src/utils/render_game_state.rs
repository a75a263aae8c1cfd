//! Terminal-oriented Unicode board renderer.
//!
//! Rendering is a one-way projection of `Board`: glyphs are produced from
//! pieces, and `piece_from_unicode` exists only so text fixtures and user
//! input can name pieces by the same glyphs.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameSession;
use crate::utils::algebraic::square_to_algebraic;

const EMPTY_GLYPH: char = '·';
const FILES_HEADER: &str = "   a  b  c  d  e  f  g  h";

/// Render the board with an optional selected square and highlighted targets.
///
/// The selected square is drawn as `[x]`, highlighted squares as `(x)`.
pub fn render_board(board: &Board, selected: Option<Square>, highlights: &[Square]) -> String {
    let mut out = String::new();

    out.push_str(FILES_HEADER);
    out.push('\n');

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let square = Square::at(row, col);
            let glyph = board.get(square).map_or(EMPTY_GLYPH, piece_to_unicode);
            let (open, close) = if selected == Some(square) {
                ('[', ']')
            } else if highlights.contains(&square) {
                ('(', ')')
            } else {
                (' ', ' ')
            };
            out.push(open);
            out.push(glyph);
            out.push(close);
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILES_HEADER);

    out
}

/// Board, clocks and the side to move, as shown by the terminal front-end.
pub fn render_game_state(session: &GameSession, highlights: &[Square]) -> String {
    let clock = session.clock();
    let mut out = render_board(session.board(), session.selected(), highlights);
    out.push('\n');
    out.push_str(&format!(
        "white {}  black {}  to move: {}",
        clock.display(Color::Light),
        clock.display(Color::Dark),
        session.current_player().name()
    ));
    if let Some(selected) = session.selected() {
        out.push_str(&format!("  selected: {}", square_to_algebraic(selected)));
    }
    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.owner, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

pub fn piece_from_unicode(glyph: char) -> ChessResult<Piece> {
    let (owner, kind) = match glyph {
        '♙' => (Color::Light, PieceKind::Pawn),
        '♘' => (Color::Light, PieceKind::Knight),
        '♗' => (Color::Light, PieceKind::Bishop),
        '♖' => (Color::Light, PieceKind::Rook),
        '♕' => (Color::Light, PieceKind::Queen),
        '♔' => (Color::Light, PieceKind::King),
        '♟' => (Color::Dark, PieceKind::Pawn),
        '♞' => (Color::Dark, PieceKind::Knight),
        '♝' => (Color::Dark, PieceKind::Bishop),
        '♜' => (Color::Dark, PieceKind::Rook),
        '♛' => (Color::Dark, PieceKind::Queen),
        '♚' => (Color::Dark, PieceKind::King),
        _ => return Err(ChessErrors::InvalidPieceGlyph(glyph)),
    };
    Ok(Piece::new(owner, kind))
}
