use crate::game_state::chess_rules::piece_value;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;

/// Material balance from white's point of view. Kings count zero.
pub fn count_material(position: &Position) -> i32 {
    position
        .board
        .pieces()
        .map(|(_, piece)| match piece.color {
            Color::White => piece_value(piece.kind),
            Color::Black => -piece_value(piece.kind),
        })
        .sum()
}
