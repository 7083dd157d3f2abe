use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::position::Position;

/// Pawn pushes, double step from the start rank, diagonal captures and en
/// passant. Direction comes from the pawn's own color.
pub fn is_legal_pawn_displacement(position: &Position, from: Square, to: Square) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let Some(pawn) = position.board.get(from) else {
        return false;
    };

    let forward = pawn.color.pawn_direction();
    let rank_delta = to.rank - from.rank;
    let file_delta = (to.file - from.file).abs();

    // Single push.
    if rank_delta == forward && file_delta == 0 {
        return !position.board.has(to);
    }

    // Double push: both the skipped and the landing square must be empty.
    if rank_delta == 2 * forward && file_delta == 0 {
        return from.rank == pawn.color.pawn_start_rank()
            && !position.board.has(from.offset(forward, 0))
            && !position.board.has(to);
    }

    if rank_delta != forward || file_delta != 1 {
        return false;
    }

    // Ordinary diagonal capture.
    if let Some(target) = position.board.get(to) {
        return target.color != pawn.color;
    }

    // En passant: the pawn that skipped the target sits one step behind it.
    if position.en_passant_square == Some(to) {
        let victim_square = to.offset(-forward, 0);
        return matches!(
            position.board.get(victim_square),
            Some(victim) if victim.kind == PieceKind::Pawn && victim.color != pawn.color
        );
    }

    false
}
