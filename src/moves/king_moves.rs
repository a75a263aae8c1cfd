//! King step rule. Castling is not part of this rule set.

use crate::game_state::chess_types::*;

#[inline]
pub fn is_king_shape(start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    d_row.abs().max(d_col.abs()) == 1
}

/// One step in any direction. Stepping into check is not rejected.
pub fn is_valid_king_move(_board: &Board, start: Square, end: Square, _player: Color) -> bool {
    is_king_shape(start, end)
}
