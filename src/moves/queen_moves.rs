use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::{is_bishop_shape, is_valid_bishop_move};
use crate::moves::rook_moves::{is_rook_shape, is_valid_rook_move};

#[inline]
pub fn is_queen_shape(start: Square, end: Square) -> bool {
    is_rook_shape(start, end) || is_bishop_shape(start, end)
}

pub fn is_valid_queen_move(board: &Board, start: Square, end: Square, player: Color) -> bool {
    is_valid_rook_move(board, start, end, player) || is_valid_bishop_move(board, start, end, player)
}
