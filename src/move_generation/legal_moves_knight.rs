use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// One of the eight L-shaped jumps onto an empty or opposing square.
pub fn is_legal_knight_displacement(position: &Position, from: Square, to: Square) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let Some(knight) = position.board.get(from) else {
        return false;
    };

    let delta = (to.rank - from.rank, to.file - from.file);
    if !KNIGHT_OFFSETS.contains(&delta) {
        return false;
    }

    match position.board.get(to) {
        Some(target) => target.color != knight.color,
        None => true,
    }
}
