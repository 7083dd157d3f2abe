use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;

/// Unit step from one square toward another, with the number of steps
/// needed along the longer axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub d_rank: i8,
    pub d_file: i8,
    pub distance: i8,
}

impl Direction {
    pub fn between(from: Square, to: Square) -> Self {
        let rank_delta = to.rank - from.rank;
        let file_delta = to.file - from.file;
        Self {
            d_rank: rank_delta.signum(),
            d_file: file_delta.signum(),
            distance: rank_delta.abs().max(file_delta.abs()),
        }
    }

    #[inline]
    pub fn is_diagonal(&self) -> bool {
        self.d_rank != 0 && self.d_file != 0
    }

    #[inline]
    pub fn is_orthogonal(&self) -> bool {
        (self.d_rank == 0) != (self.d_file == 0)
    }
}

/// Shared sliding test for bishops, rooks, queens and plain king steps.
///
/// `from` and `to` must lie on the direction vector, `axis_allowed` must
/// accept it, every square strictly between must be empty, and the
/// destination must be empty or hold an opposing piece.
pub fn is_legal_linear_displacement(
    position: &Position,
    from: Square,
    to: Square,
    axis_allowed: impl Fn(Direction) -> bool,
) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let Some(mover) = position.board.get(from) else {
        return false;
    };

    let direction = Direction::between(from, to);
    if direction.is_diagonal() && (to.rank - from.rank).abs() != (to.file - from.file).abs() {
        return false;
    }
    if !axis_allowed(direction) {
        return false;
    }

    for k in 1..direction.distance {
        let step = from.offset(k * direction.d_rank, k * direction.d_file);
        if position.board.has(step) {
            return false;
        }
    }

    match position.board.get(to) {
        Some(target) => target.color != mover.color,
        None => true,
    }
}
