use crate::game_state::chess_types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn is_knight_shape(start: Square, end: Square) -> bool {
    KNIGHT_OFFSETS.contains(&start.delta_to(end))
}

/// Knights jump, so occupancy between the endpoints is never consulted.
pub fn is_valid_knight_move(_board: &Board, start: Square, end: Square, _player: Color) -> bool {
    is_knight_shape(start, end)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_knight_move, KNIGHT_OFFSETS};
    use crate::game_state::chess_types::*;

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let board = Board::empty();
        let d4 = Square::at(4, 3);
        let targets = Square::all()
            .filter(|&sq| is_valid_knight_move(&board, d4, sq, Color::Light))
            .count();
        assert_eq!(targets, 8);
        assert_eq!(KNIGHT_OFFSETS.len(), targets);
    }

    #[test]
    fn knight_jumps_over_surrounding_pieces() {
        let board = Board::initial_position();
        let g1 = Square::at(7, 6);
        assert!(is_valid_knight_move(&board, g1, Square::at(5, 5), Color::Light));
        assert!(is_valid_knight_move(&board, g1, Square::at(5, 7), Color::Light));
        assert!(!is_valid_knight_move(&board, g1, Square::at(5, 6), Color::Light));
    }
}
