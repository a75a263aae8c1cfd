use crate::game_state::chess_types::*;

/// True when every square strictly between `start` and `end` is empty.
///
/// Only meaningful for endpoints on a shared row, column or diagonal; callers
/// check the shape first.
pub fn path_is_clear(board: &Board, start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    let distance = d_row.abs().max(d_col.abs());
    let (step_row, step_col) = (d_row.signum(), d_col.signum());

    (1..distance).all(|i| {
        start
            .offset(step_row * i, step_col * i)
            .is_some_and(|sq| board.is_empty(sq))
    })
}

#[inline]
pub fn is_piece_of_player(piece: Option<Piece>, player: Color) -> bool {
    piece.is_some_and(|p| p.owner == player)
}

#[inline]
pub fn is_enemy_piece(piece: Option<Piece>, player: Color) -> bool {
    piece.is_some_and(|p| p.owner != player)
}
