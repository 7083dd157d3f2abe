use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::is_legal_linear_displacement;

/// Diagonal slide of any length.
pub fn is_legal_bishop_displacement(position: &Position, from: Square, to: Square) -> bool {
    is_legal_linear_displacement(position, from, to, |direction| {
        direction.is_diagonal() && direction.distance > 0
    })
}
