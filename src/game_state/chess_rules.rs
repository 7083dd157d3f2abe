//! Canonical chess-rule constants and rule-policy switches.
//!
//! Stores the standard starting FEN, the piece values used for material
//! counting, and the castling geometry shared by legality testing and move
//! application.

use crate::game_state::chess_types::{CastlingSide, Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Standard material value of a piece kind. Kings are worth nothing.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Castling rule policy.
///
/// `Standard` follows the laws of chess. `Legacy` reproduces the behavior of
/// the board this engine replaced: the rook's corner is never inspected, the
/// queenside b-file square must also be unattacked, and capturing a rook on
/// its corner leaves the matching right in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CastlingRules {
    #[default]
    Standard,
    Legacy,
}

impl CastlingRules {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(CastlingRules::Standard),
            "legacy" => Some(CastlingRules::Legacy),
            _ => None,
        }
    }
}

/// Fixed squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

impl CastlingPath {
    pub const fn new(color: Color, side: CastlingSide) -> Self {
        let rank = color.home_rank();
        match side {
            CastlingSide::Kingside => Self {
                king_from: Square::new(rank, 5),
                king_to: Square::new(rank, 7),
                rook_from: Square::new(rank, 8),
                rook_to: Square::new(rank, 6),
            },
            CastlingSide::Queenside => Self {
                king_from: Square::new(rank, 5),
                king_to: Square::new(rank, 3),
                rook_from: Square::new(rank, 1),
                rook_to: Square::new(rank, 4),
            },
        }
    }

    /// Squares strictly between king and rook; all must be empty.
    pub fn between(&self) -> impl Iterator<Item = Square> {
        let rank = self.king_from.rank;
        let (low, high) = if self.rook_from.file < self.king_from.file {
            (self.rook_from.file + 1, self.king_from.file)
        } else {
            (self.king_from.file + 1, self.rook_from.file)
        };
        (low..high).map(move |file| Square::new(rank, file))
    }

    /// Squares the king stands on, crosses, or lands on.
    pub fn king_walk(&self) -> [Square; 3] {
        let step = (self.king_to.file - self.king_from.file).signum();
        [
            self.king_from,
            self.king_from.offset(0, step),
            self.king_to,
        ]
    }

    /// Castling move matching a king displacement, if any.
    pub fn for_king_move(color: Color, from: Square, to: Square) -> Option<(CastlingSide, Self)> {
        [CastlingSide::Kingside, CastlingSide::Queenside]
            .into_iter()
            .map(|side| (side, Self::new(color, side)))
            .find(|(_, path)| path.king_from == from && path.king_to == to)
    }
}
