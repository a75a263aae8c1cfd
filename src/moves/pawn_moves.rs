use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_enemy_piece;

/// Forward one or two rows, or one diagonal step forward.
#[inline]
pub fn is_pawn_shape(start: Square, end: Square, player: Color) -> bool {
    let direction = player.pawn_direction();
    let (d_row, d_col) = start.delta_to(end);
    (d_row == direction && d_col.abs() <= 1) || (d_row == 2 * direction && d_col == 0)
}

/// Pawn rule: one step forward onto an empty square, two steps from the
/// starting row through an empty square, or one step diagonally forward onto
/// an enemy piece. No en passant and no promotion.
pub fn is_valid_pawn_move(board: &Board, start: Square, end: Square, player: Color) -> bool {
    let direction = player.pawn_direction();
    let (d_row, d_col) = start.delta_to(end);
    let target = board.get(end);

    if d_col == 0 && target.is_none() {
        if d_row == direction {
            return true;
        }
        if start.row() == player.pawn_start_row() && d_row == 2 * direction {
            return start
                .offset(direction, 0)
                .is_some_and(|intermediate| board.is_empty(intermediate));
        }
    }

    if d_col.abs() == 1 && d_row == direction {
        return is_enemy_piece(target, player);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{is_pawn_shape, is_valid_pawn_move};
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_checks::is_valid_move;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn light_pawn_single_and_double_step_from_start() {
        let board = Board::initial_position();
        let e2 = Square::at(6, 4);
        assert!(is_valid_pawn_move(&board, e2, Square::at(5, 4), Color::Light));
        assert!(is_valid_pawn_move(&board, e2, Square::at(4, 4), Color::Light));
        assert!(!is_valid_pawn_move(&board, e2, Square::at(3, 4), Color::Light));
        assert!(!is_valid_pawn_move(&board, e2, Square::at(7, 4), Color::Light));
    }

    #[test]
    fn pawn_cannot_move_diagonally_onto_empty_square() {
        let board = Board::initial_position();
        assert!(!is_valid_pawn_move(&board, Square::at(6, 4), Square::at(5, 3), Color::Light));
        assert!(!is_valid_pawn_move(&board, Square::at(1, 4), Square::at(2, 5), Color::Dark));
    }

    #[test]
    fn double_step_needs_clear_intermediate_square() {
        let (board, _) = parse_fen("8/8/8/8/8/4n3/4P3/8 w").expect("fen should parse");
        assert!(!is_valid_pawn_move(&board, Square::at(6, 4), Square::at(4, 4), Color::Light));
        assert!(!is_valid_pawn_move(&board, Square::at(6, 4), Square::at(5, 4), Color::Light));
    }

    #[test]
    fn double_step_needs_empty_destination() {
        let (board, _) = parse_fen("8/8/8/8/4n3/8/4P3/8 w").expect("fen should parse");
        assert!(!is_valid_pawn_move(&board, Square::at(6, 4), Square::at(4, 4), Color::Light));
        assert!(is_valid_pawn_move(&board, Square::at(6, 4), Square::at(5, 4), Color::Light));

        let (board, _) = parse_fen("8/4p3/8/4N3/8/8/8/8 b").expect("fen should parse");
        assert!(!is_valid_pawn_move(&board, Square::at(1, 4), Square::at(3, 4), Color::Dark));
        assert!(!is_valid_move(&board, Color::Dark, Square::at(1, 4), Square::at(3, 4)));
        assert!(is_valid_move(&board, Color::Dark, Square::at(1, 4), Square::at(2, 4)));
    }

    #[test]
    fn double_step_only_from_starting_row() {
        let (board, _) = parse_fen("8/8/8/8/8/4P3/8/8 w").expect("fen should parse");
        assert!(!is_valid_pawn_move(&board, Square::at(5, 4), Square::at(3, 4), Color::Light));
        assert!(is_valid_pawn_move(&board, Square::at(5, 4), Square::at(4, 4), Color::Light));
    }

    #[test]
    fn pawn_captures_diagonally_but_not_straight_ahead() {
        let (board, _) = parse_fen("8/8/8/3pp3/4P3/8/8/8 w").expect("fen should parse");
        let e4 = Square::at(4, 4);
        assert!(is_valid_pawn_move(&board, e4, Square::at(3, 3), Color::Light));
        assert!(!is_valid_pawn_move(&board, e4, Square::at(3, 4), Color::Light));
        assert!(is_valid_pawn_move(&board, Square::at(3, 3), e4, Color::Dark));
    }

    #[test]
    fn pawn_shape_covers_every_pawn_target() {
        let e4 = Square::at(4, 4);
        let shapes: Vec<Square> = Square::all()
            .filter(|&sq| is_pawn_shape(e4, sq, Color::Light))
            .collect();
        assert_eq!(
            shapes,
            vec![Square::at(2, 4), Square::at(3, 3), Square::at(3, 4), Square::at(3, 5)]
        );
        assert!(!is_pawn_shape(e4, Square::at(5, 4), Color::Light));
        assert!(is_pawn_shape(e4, Square::at(5, 4), Color::Dark));
    }

    #[test]
    fn dark_pawn_moves_toward_row_seven() {
        let board = Board::initial_position();
        let d7 = Square::at(1, 3);
        assert!(is_valid_pawn_move(&board, d7, Square::at(3, 3), Color::Dark));
        assert!(!is_valid_pawn_move(&board, Square::at(2, 3), Square::at(1, 3), Color::Dark));
    }
}
