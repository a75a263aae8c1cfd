//! Enumeration of legal destinations.
//!
//! Used to highlight targets for a selected piece. Candidates are narrowed by
//! the piece's shape test and then filtered through `is_valid_move`, so
//! enumeration and validation can never disagree.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{has_move_shape, is_valid_move};

/// Every square the piece on `start` may legally move to, in row-major order.
pub fn legal_destinations(board: &Board, player: Color, start: Square) -> Vec<Square> {
    let Some(piece) = board.get(start).filter(|p| p.owner == player) else {
        return Vec::new();
    };

    Square::all()
        .filter(|&end| has_move_shape(piece.kind, player, start, end))
        .filter(|&end| is_valid_move(board, player, start, end))
        .collect()
}

/// All `(start, end)` pairs available to `player`.
pub fn all_legal_moves(board: &Board, player: Color) -> Vec<(Square, Square)> {
    let mut moves = Vec::with_capacity(64);
    for (start, piece) in board.pieces() {
        if piece.owner != player {
            continue;
        }
        moves.extend(
            legal_destinations(board, player, start)
                .into_iter()
                .map(|end| (start, end)),
        );
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::{all_legal_moves, legal_destinations};
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_has_twenty_moves_for_each_side() {
        let board = Board::initial_position();
        assert_eq!(all_legal_moves(&board, Color::Light).len(), 20);
        assert_eq!(all_legal_moves(&board, Color::Dark).len(), 20);
    }

    #[test]
    fn knight_destinations_in_starting_position() {
        let board = Board::initial_position();
        let b1 = Square::at(7, 1);
        assert_eq!(
            legal_destinations(&board, Color::Light, b1),
            vec![Square::at(5, 0), Square::at(5, 2)]
        );
    }

    #[test]
    fn opponent_piece_has_no_destinations() {
        let board = Board::initial_position();
        assert!(legal_destinations(&board, Color::Light, Square::at(0, 1)).is_empty());
        assert!(legal_destinations(&board, Color::Light, Square::at(4, 4)).is_empty());
    }
}
