use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::is_legal_linear_displacement;

/// Union of the bishop and rook axes.
pub fn is_legal_queen_displacement(position: &Position, from: Square, to: Square) -> bool {
    is_legal_linear_displacement(position, from, to, |direction| direction.distance > 0)
}

#[cfg(test)]
mod tests {
    use super::is_legal_queen_displacement;
    use crate::game_state::chess_types::Square;
    use crate::game_state::position::Position;

    #[test]
    fn queen_slides_on_both_axes_but_never_jumps() {
        let game = Position::from_fen("4k3/8/8/8/3Q4/8/5N2/4K3 w - - 0 1").expect("FEN should parse");
        let d4 = Square::new(4, 4);

        assert!(is_legal_queen_displacement(&game, d4, Square::new(8, 4)));
        assert!(is_legal_queen_displacement(&game, d4, Square::new(7, 7)));
        assert!(is_legal_queen_displacement(&game, d4, Square::new(3, 5)));
        assert!(!is_legal_queen_displacement(&game, d4, Square::new(1, 7)));
        assert!(!is_legal_queen_displacement(&game, d4, Square::new(6, 5)));
    }
}
