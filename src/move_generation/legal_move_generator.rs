//! Full legality pipeline.
//!
//! Dispatches per-piece displacement tests, filters self-check outcomes on a
//! ghost copy, enumerates legal moves and classifies check / checkmate /
//! stalemate for the side to move.

use crate::game_state::chess_types::{ChessMove, Color, PieceKind, ResultStatus, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::push_move;
use crate::move_generation::legal_move_checks::{get_threats, is_king_in_check, king_square};
use crate::move_generation::legal_moves_bishop::is_legal_bishop_displacement;
use crate::move_generation::legal_moves_king::is_legal_king_displacement;
use crate::move_generation::legal_moves_knight::is_legal_knight_displacement;
use crate::move_generation::legal_moves_pawn::is_legal_pawn_displacement;
use crate::move_generation::legal_moves_queen::is_legal_queen_displacement;
use crate::move_generation::legal_moves_rook::is_legal_rook_displacement;

/// Geometric legality of moving the piece on `from` to `to`.
///
/// Ignores whose turn it is and whether the mover's king ends up in check;
/// both belong to `can_play_move`. Off-board squares and empty sources are
/// simply illegal.
pub fn is_legal_displacement(position: &Position, from: Square, to: Square) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let Some(piece) = position.board.get(from) else {
        return false;
    };

    match piece.kind {
        PieceKind::Pawn => is_legal_pawn_displacement(position, from, to),
        PieceKind::Knight => is_legal_knight_displacement(position, from, to),
        PieceKind::Bishop => is_legal_bishop_displacement(position, from, to),
        PieceKind::Rook => is_legal_rook_displacement(position, from, to),
        PieceKind::Queen => is_legal_queen_displacement(position, from, to),
        PieceKind::King => is_legal_king_displacement(position, from, to),
    }
}

/// True legality: own piece, side to move, legal displacement, and the
/// mover's king is not threatened once the move is played on a ghost.
pub fn can_play_move(position: &Position, from: Square, to: Square) -> bool {
    let Some(piece) = position.board.get(from) else {
        return false;
    };
    if piece.color != position.side_to_move {
        return false;
    }
    if !is_legal_displacement(position, from, to) {
        return false;
    }

    let mut ghost = position.ghost();
    push_move(&mut ghost, from, to);
    !is_king_in_check(&ghost, piece.color)
}

/// Every legal move for the side to move, in a1..h8 source order.
pub fn legal_moves(position: &Position) -> Vec<ChessMove> {
    let mut out = Vec::<ChessMove>::with_capacity(64);
    for (from, _) in position.board.pieces_of(position.side_to_move) {
        for to in Square::all() {
            if can_play_move(position, from, to) {
                out.push(ChessMove::new(from, to));
            }
        }
    }
    out
}

pub fn has_any_legal_move(position: &Position) -> bool {
    position
        .board
        .pieces_of(position.side_to_move)
        .any(|(from, _)| Square::all().any(|to| can_play_move(position, from, to)))
}

/// Recompute check / checkmate / stalemate for the side to move.
///
/// Boards without exactly one king per side stay inconclusive: check may
/// still be reported but neither mate nor stalemate is declared.
pub fn update_result(position: &mut Position) {
    let side = position.side_to_move;
    let mut result = ResultStatus::default();

    if let Some(king) = king_square(position, side) {
        if !get_threats(position, side, king).is_empty() {
            result.check = Some(king);
        }
    }

    let one_king_each = [Color::White, Color::Black]
        .into_iter()
        .all(|color| position.board.king_squares(color).len() == 1);

    if one_king_each && !has_any_legal_move(position) {
        if result.check.is_some() {
            result.checkmate = true;
        } else {
            result.stalemate = true;
        }
    }

    position.result = result;
}

#[cfg(test)]
mod tests {
    use super::{can_play_move, has_any_legal_move, is_legal_displacement, legal_moves, update_result};
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_checks::{get_threats, is_king_in_check};
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn start_position_has_twenty_moves() {
        let game = Position::new_game();
        assert_eq!(legal_moves(&game).len(), 20);
        assert!(has_any_legal_move(&game));
    }

    #[test]
    fn out_of_range_coordinates_are_just_illegal() {
        let game = Position::new_game();
        assert!(!is_legal_displacement(&game, Square::new(2, 5), Square::new(2, 9)));
        assert!(!is_legal_displacement(&game, Square::new(0, 5), Square::new(3, 5)));
        assert!(!can_play_move(&game, Square::new(9, 9), Square::new(1, 1)));
        assert!(!can_play_move(&game, Square::new(4, 4), Square::new(5, 4)));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // Bishop e2 pinned to the king on e1 by the rook on e8.
        let game = Position::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_legal_displacement(&game, Square::new(2, 5), Square::new(3, 4)));
        assert!(!can_play_move(&game, Square::new(2, 5), Square::new(3, 4)));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let game = Position::from_fen("3rk3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!can_play_move(&game, Square::new(1, 5), Square::new(1, 4)));
        assert!(can_play_move(&game, Square::new(1, 5), Square::new(1, 6)));
    }

    #[test]
    fn king_cannot_retreat_along_checking_line() {
        let game = Position::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN should parse");
        assert!(!can_play_move(&game, Square::new(1, 5), Square::new(1, 6)));
        assert!(can_play_move(&game, Square::new(1, 5), Square::new(2, 5)));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_refused() {
        // Capturing d6 would clear the fifth rank between rook a5 and king h5.
        let game = Position::from_fen("4k3/8/8/r2pP2K/8/8/8/8 w - d6 0 1").expect("FEN should parse");
        assert!(is_legal_displacement(&game, Square::new(5, 5), Square::new(6, 4)));
        assert!(!can_play_move(&game, Square::new(5, 5), Square::new(6, 4)));
    }

    #[test]
    fn stalemate_detected_without_check() {
        let mut game = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        update_result(&mut game);
        assert!(game.result.stalemate);
        assert!(!game.result.checkmate);
        assert_eq!(game.result.check, None);
    }

    #[test]
    fn checkmate_detected_with_check_square() {
        let game = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        assert!(game.result.checkmate);
        assert!(!game.result.stalemate);
        assert_eq!(game.result.check, Some(Square::new(8, 7)));
    }

    #[test]
    fn missing_king_leaves_result_inconclusive() {
        // Stalemate geometry, but white has two kings.
        let game = Position::from_fen("k7/2K5/1Q6/8/8/8/8/7K b - - 0 1").expect("FEN should parse");
        assert!(!has_any_legal_move(&game));
        assert!(!game.result.stalemate);
        assert!(!game.result.checkmate);

        let kingless = Position::from_fen("8/8/8/8/8/8/P7/8 b - - 0 1").expect("FEN should parse");
        assert!(!kingless.result.stalemate);
        assert!(!kingless.result.checkmate);
    }

    #[test]
    fn random_playouts_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..4 {
            let mut game = Position::new_game();
            for _ in 0..80 {
                let moves = legal_moves(&game);
                let Some(mv) = moves.choose(&mut rng).copied() else {
                    assert!(game.result.checkmate || game.result.stalemate);
                    break;
                };

                // A king never walks into a threatened square.
                for (king, _) in game
                    .board
                    .pieces_of(game.side_to_move)
                    .filter(|(_, piece)| piece.kind == PieceKind::King)
                {
                    for to in Square::all() {
                        if !get_threats(&game, game.side_to_move, to).is_empty() {
                            assert!(!can_play_move(&game, king, to));
                        }
                    }
                }

                let mover = game.side_to_move;
                game.play_move(mv.from, mv.to).expect("generated move should be legal");
                assert!(!is_king_in_check(&game, mover));

                let fen = game.get_fen();
                let reparsed = Position::from_fen(&fen).expect("generated FEN should parse");
                assert_eq!(reparsed.get_fen(), fen);
                assert_eq!(reparsed.board, game.board);
                assert_eq!(reparsed.result, game.result);
            }
        }
    }

    #[test]
    fn side_to_move_owns_the_move() {
        let game = Position::new_game();
        assert_eq!(game.side_to_move, Color::White);
        assert!(!can_play_move(&game, Square::new(7, 5), Square::new(6, 5)));
    }
}
