use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::path_is_clear;

/// Same row or same column, distinct endpoints.
#[inline]
pub fn is_rook_shape(start: Square, end: Square) -> bool {
    start != end && (start.row() == end.row() || start.col() == end.col())
}

pub fn is_valid_rook_move(board: &Board, start: Square, end: Square, _player: Color) -> bool {
    is_rook_shape(start, end) && path_is_clear(board, start, end)
}
