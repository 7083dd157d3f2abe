use crate::game_state::chess_rules::{CastlingPath, CastlingRules};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

/// Apply a displacement in place. No legality checks; an empty or off-board
/// source square is a no-op.
///
/// Does not refresh `position.result`: ghost copies made for check tests
/// never need it, and the validated entry points call `update_result`.
pub fn push_move(position: &mut Position, from: Square, to: Square) {
    if !to.is_on_board() {
        return;
    }
    let Some(piece) = position.board.get(from) else {
        return;
    };

    let moving_color = piece.color;
    let is_pawn_move = piece.kind == PieceKind::Pawn;
    let is_en_passant = is_pawn_move && from.file != to.file && !position.board.has(to);

    // Update en-passant square.
    position.en_passant_square = if is_pawn_move && (to.rank - from.rank).abs() == 2 {
        Some(from.offset(moving_color.pawn_direction(), 0))
    } else {
        None
    };

    // Update castling rights.
    update_castling_rights(position, piece, from, to);

    // Handle captures; the en-passant victim sits behind the destination.
    let capture_square = if is_en_passant {
        Square::new(from.rank, to.file)
    } else {
        to
    };
    let is_capture = position.board.remove(capture_square).is_some();

    // Update clocks.
    if is_capture || is_pawn_move {
        position.halfmove_clock = 0;
    } else {
        position.halfmove_clock = position.halfmove_clock.saturating_add(1);
    }

    position.board.remove(from);
    position.board.set(to, piece);

    // Castling rook move.
    if piece.kind == PieceKind::King && (to.file - from.file).abs() == 2 {
        if let Some((_, path)) = CastlingPath::for_king_move(moving_color, from, to) {
            if let Some(rook) = position.board.remove(path.rook_from) {
                position.board.set(path.rook_to, rook);
            }
        }
    }

    // Promotion, always to a queen.
    if is_pawn_move && to.rank == moving_color.promotion_rank() {
        position
            .board
            .set(to, Piece::new(moving_color, PieceKind::Queen));
    }

    if moving_color == Color::Black {
        position.fullmove_number = position.fullmove_number.saturating_add(1);
    }
    position.side_to_move = moving_color.opposite();
}

fn update_castling_rights(position: &mut Position, piece: Piece, from: Square, to: Square) {
    if piece.kind == PieceKind::King {
        position.castling_rights.clear_color(piece.color);
    }

    if piece.kind == PieceKind::Rook {
        clear_right_for_corner(position, from);
    }

    // A captured rook takes its right with it.
    if position.rules == CastlingRules::Standard {
        clear_right_for_corner(position, to);
    }
}

fn clear_right_for_corner(position: &mut Position, square: Square) {
    for color in [Color::White, Color::Black] {
        for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
            if CastlingPath::new(color, side).rook_from == square {
                position.castling_rights.clear(color, side);
            }
        }
    }
}
