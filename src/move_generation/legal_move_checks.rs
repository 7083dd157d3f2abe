use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::is_legal_displacement;

/// Squares of every non-`defender` piece that could move onto `square`,
/// each treated as the attacker to move regardless of the side to move.
///
/// An empty target is evaluated on a ghost holding a defender placeholder,
/// so pawn diagonals count and pawn pushes never do.
pub fn get_threats(position: &Position, defender: Color, square: Square) -> Vec<Square> {
    if !square.is_on_board() {
        return Vec::new();
    }

    let placeholder;
    let board_view = if position.board.has(square) {
        position
    } else {
        let mut ghost = position.ghost();
        ghost.board.set(square, Piece::new(defender, PieceKind::Pawn));
        placeholder = ghost;
        &placeholder
    };

    board_view
        .board
        .pieces()
        .filter(|(_, piece)| piece.color != defender)
        .filter(|(from, _)| is_legal_displacement(board_view, *from, square))
        .map(|(from, _)| from)
        .collect()
}

#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    position.board.king_squares(color).into_iter().next()
}

/// True when any king of `color` is threatened.
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    position
        .board
        .king_squares(color)
        .into_iter()
        .any(|king| !get_threats(position, color, king).is_empty())
}
