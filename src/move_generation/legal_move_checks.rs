//! Move legality verdicts.
//!
//! `is_valid_move` is the single entry point the session uses. It is a pure
//! function of its arguments: ownership and self-capture checks first, then a
//! dispatch on the moving piece's kind. There is no check-safety filtering,
//! so a move that leaves the mover's king attacked is still accepted.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_piece_of_player;
use crate::moves::bishop_moves::{is_bishop_shape, is_valid_bishop_move};
use crate::moves::king_moves::{is_king_shape, is_valid_king_move};
use crate::moves::knight_moves::{is_knight_shape, is_valid_knight_move};
use crate::moves::pawn_moves::{is_pawn_shape, is_valid_pawn_move};
use crate::moves::queen_moves::{is_queen_shape, is_valid_queen_move};
use crate::moves::rook_moves::{is_rook_shape, is_valid_rook_move};

/// Rule signature shared by every piece kind.
pub type MoveRule = fn(&Board, Square, Square, Color) -> bool;

#[inline]
pub fn rule_for(kind: PieceKind) -> MoveRule {
    match kind {
        PieceKind::Pawn => is_valid_pawn_move,
        PieceKind::Knight => is_valid_knight_move,
        PieceKind::Bishop => is_valid_bishop_move,
        PieceKind::Rook => is_valid_rook_move,
        PieceKind::Queen => is_valid_queen_move,
        PieceKind::King => is_valid_king_move,
    }
}

/// Occupancy-free geometry test. Every legal move of `kind` satisfies it, so
/// it can narrow candidate squares before the full check.
pub fn has_move_shape(kind: PieceKind, player: Color, start: Square, end: Square) -> bool {
    match kind {
        PieceKind::Pawn => is_pawn_shape(start, end, player),
        PieceKind::Knight => is_knight_shape(start, end),
        PieceKind::Bishop => is_bishop_shape(start, end),
        PieceKind::Rook => is_rook_shape(start, end),
        PieceKind::Queen => is_queen_shape(start, end),
        PieceKind::King => is_king_shape(start, end),
    }
}

pub fn is_valid_move(board: &Board, current_player: Color, start: Square, end: Square) -> bool {
    if start == end {
        return false;
    }

    let Some(piece) = board.get(start) else {
        return false;
    };
    if piece.owner != current_player {
        return false;
    }

    if is_piece_of_player(board.get(end), current_player) {
        return false;
    }

    rule_for(piece.kind)(board, start, end, current_player)
}
