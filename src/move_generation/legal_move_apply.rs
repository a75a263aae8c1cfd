use crate::game_state::chess_types::*;

/// Move the piece on `start` to `end`, discarding whatever stood on `end`.
///
/// Legality is not re-checked here. An empty `start` leaves the board as is.
pub fn apply_move(board: &mut Board, start: Square, end: Square) -> &Board {
    if let Some(moving) = board.get(start) {
        board.set(start, None);
        board.set(end, Some(moving));
    }
    board
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::game_state::chess_types::*;

    #[test]
    fn apply_move_relocates_piece() {
        let mut board = Board::initial_position();
        let after = *apply_move(&mut board, Square::at(6, 4), Square::at(4, 4));
        assert!(after.is_empty(Square::at(6, 4)));
        assert_eq!(
            after.get(Square::at(4, 4)),
            Some(Piece::new(Color::Light, PieceKind::Pawn))
        );
        assert_eq!(after, board);
    }

    #[test]
    fn capture_discards_target_piece() {
        let mut board = Board::initial_position();
        apply_move(&mut board, Square::at(7, 3), Square::at(1, 3));
        assert_eq!(board.pieces().count(), 31);
        assert_eq!(
            board.get(Square::at(1, 3)),
            Some(Piece::new(Color::Light, PieceKind::Queen))
        );
    }

    #[test]
    fn empty_source_is_a_no_op() {
        let mut board = Board::initial_position();
        apply_move(&mut board, Square::at(4, 4), Square::at(3, 4));
        assert_eq!(board, Board::initial_position());
    }
}
