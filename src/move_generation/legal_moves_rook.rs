use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::is_legal_linear_displacement;

/// Rank or file slide of any length.
pub fn is_legal_rook_displacement(position: &Position, from: Square, to: Square) -> bool {
    is_legal_linear_displacement(position, from, to, |direction| {
        direction.is_orthogonal() && direction.distance > 0
    })
}
