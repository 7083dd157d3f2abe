use crate::game_state::chess_rules::{CastlingPath, CastlingRules};
use crate::game_state::chess_types::{CastlingSide, Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::get_threats;
use crate::move_generation::legal_move_shared::is_legal_linear_displacement;

/// Single step in any direction, or one of the four castling moves.
pub fn is_legal_king_displacement(position: &Position, from: Square, to: Square) -> bool {
    let regular_step =
        is_legal_linear_displacement(position, from, to, |direction| direction.distance == 1);
    if regular_step {
        return true;
    }

    let Some(king) = position.board.get(from) else {
        return false;
    };
    is_legal_castling(position, king.color, from, to)
}

/// Castling test: the matching right is held, the squares between king and
/// rook are empty, and no square the king walks over is attacked.
///
/// Geometry and emptiness are checked before any threat query, so the
/// destination is always empty when threats are evaluated.
pub fn is_legal_castling(position: &Position, color: Color, from: Square, to: Square) -> bool {
    let Some((side, path)) = CastlingPath::for_king_move(color, from, to) else {
        return false;
    };
    if !position.castling_rights.has(color, side) {
        return false;
    }
    if path.between().any(|square| position.board.has(square)) {
        return false;
    }

    if position.rules == CastlingRules::Standard
        && position.board.get(path.rook_from) != Some(Piece::new(color, PieceKind::Rook))
    {
        return false;
    }

    let unattacked = |square: Square| get_threats(position, color, square).is_empty();
    if !path.king_walk().into_iter().all(unattacked) {
        return false;
    }

    // The replaced board also required b1/b8 to be safe for O-O-O.
    if position.rules == CastlingRules::Legacy && side == CastlingSide::Queenside {
        return unattacked(Square::new(color.home_rank(), 2));
    }

    true
}

#[cfg(test)]
mod tests {
    use super::{is_legal_castling, is_legal_king_displacement};
    use crate::game_state::chess_rules::CastlingRules;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::position::Position;

    const E1: Square = Square::new(1, 5);
    const G1: Square = Square::new(1, 7);
    const C1: Square = Square::new(1, 3);

    #[test]
    fn king_steps_one_square() {
        let game = Position::from_fen("4k3/8/8/8/3K4/8/8/8 w - - 0 1").expect("FEN should parse");
        let d4 = Square::new(4, 4);

        assert!(is_legal_king_displacement(&game, d4, Square::new(5, 5)));
        assert!(is_legal_king_displacement(&game, d4, Square::new(3, 4)));
        assert!(!is_legal_king_displacement(&game, d4, Square::new(6, 4)));
        assert!(!is_legal_king_displacement(&game, d4, Square::new(5, 6)));
    }

    #[test]
    fn castles_both_ways_when_clear() {
        let game = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        assert!(is_legal_castling(&game, Color::White, E1, G1));
        assert!(is_legal_castling(&game, Color::White, E1, C1));
        assert!(is_legal_castling(&game, Color::Black, Square::new(8, 5), Square::new(8, 7)));
    }

    #[test]
    fn castling_needs_the_right() {
        let game = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1").expect("FEN should parse");
        assert!(!is_legal_castling(&game, Color::White, E1, G1));
        assert!(is_legal_castling(&game, Color::White, E1, C1));
    }

    #[test]
    fn castling_refused_through_attacked_square() {
        // Black rook on f8 covers f1 even though the rook path h1-f1 is clear.
        let game = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert!(!is_legal_castling(&game, Color::White, E1, G1));
        assert!(is_legal_castling(&game, Color::White, E1, C1));
    }

    #[test]
    fn castling_refused_out_of_check_and_into_pawn_attack() {
        let checked = Position::from_fen("4k3/8/8/8/8/8/3p4/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert!(!is_legal_castling(&checked, Color::White, E1, G1));
        assert!(!is_legal_castling(&checked, Color::White, E1, C1));

        // Pawn on h2 attacks g1, an empty square.
        let pawn_guard = Position::from_fen("4k3/8/8/8/8/8/7p/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert!(!is_legal_castling(&pawn_guard, Color::White, E1, G1));
        assert!(is_legal_castling(&pawn_guard, Color::White, E1, C1));
    }

    #[test]
    fn castling_refused_when_path_is_blocked() {
        let game = Position::from_fen("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1").expect("FEN should parse");
        assert!(!is_legal_castling(&game, Color::White, E1, G1));
        assert!(!is_legal_castling(&game, Color::White, E1, C1));
    }

    #[test]
    fn standard_rules_require_the_rook_but_legacy_trusts_the_right() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w KQ - 0 1";
        let standard = Position::from_fen(fen).expect("FEN should parse");
        assert!(!is_legal_castling(&standard, Color::White, E1, G1));

        let legacy = Position::from_fen_with_rules(fen, CastlingRules::Legacy).expect("FEN should parse");
        assert!(is_legal_castling(&legacy, Color::White, E1, G1));
    }

    #[test]
    fn legacy_rules_also_guard_the_b_file_on_queenside() {
        // Black bishop on e4 attacks b1 only.
        let fen = "4k3/8/8/8/4b3/8/8/R3K3 w Q - 0 1";
        let standard = Position::from_fen(fen).expect("FEN should parse");
        assert!(is_legal_castling(&standard, Color::White, E1, C1));

        let legacy = Position::from_fen_with_rules(fen, CastlingRules::Legacy).expect("FEN should parse");
        assert!(!is_legal_castling(&legacy, Color::White, E1, C1));
    }
}
