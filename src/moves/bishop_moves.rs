use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::path_is_clear;

/// Equal nonzero row and column distance.
#[inline]
pub fn is_bishop_shape(start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    d_row != 0 && d_row.abs() == d_col.abs()
}

pub fn is_valid_bishop_move(board: &Board, start: Square, end: Square, _player: Color) -> bool {
    is_bishop_shape(start, end) && path_is_clear(board, start, end)
}
