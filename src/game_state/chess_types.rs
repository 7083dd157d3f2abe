//! Value types shared by the position engine.
//!
//! Squares use 1-based `(rank, file)` coordinates: rank 1 is White's home
//! rank and file 1 is the `a` file. Coordinates outside `1..=8` are valid
//! values; every legality query simply treats them as illegal.

use std::fmt;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank holding this side's king and rooks in the initial array.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Rank delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lowercase FEN letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// SAN piece letter; pawns have none.
    #[inline]
    pub const fn san_letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }
}

/// A colored piece. Pieces are plain values: moving one means removing it
/// from a square and placing an equal value elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Self { color, kind })
    }
}

/// Board coordinate, 1-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.rank >= 1 && self.rank <= 8 && self.file >= 1 && self.file <= 8
    }

    /// Canonical `0..64` key (`a1 == 0`, `h8 == 63`), `None` off the board.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(((self.rank - 1) * 8 + (self.file - 1)) as usize)
        } else {
            None
        }
    }

    /// Inverse of `index`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self {
            rank: (index / 8) as i8 + 1,
            file: (index % 8) as i8 + 1,
        }
    }

    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Self {
        Self {
            rank: self.rank + d_rank,
            file: self.file + d_file,
        }
    }

    /// File letter `a..=h`; `?` off the board.
    pub fn file_char(self) -> char {
        if (1..=8).contains(&self.file) {
            char::from(b'a' + (self.file - 1) as u8)
        } else {
            '?'
        }
    }

    /// Rank digit `1..=8`; `?` off the board.
    pub fn rank_char(self) -> char {
        if (1..=8).contains(&self.rank) {
            char::from(b'0' + self.rank as u8)
        } else {
            '?'
        }
    }

    /// Every on-board square, a1..h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// A from/to displacement. Promotion is implied (always to queen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Compact coordinate notation, e.g. `e2e4`.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

/// Four independent castling rights. Never restored by normal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub fn has(&self, color: Color, side: CastlingSide) -> bool {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => self.white_kingside,
            (Color::White, CastlingSide::Queenside) => self.white_queenside,
            (Color::Black, CastlingSide::Kingside) => self.black_kingside,
            (Color::Black, CastlingSide::Queenside) => self.black_queenside,
        }
    }

    pub fn clear(&mut self, color: Color, side: CastlingSide) {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => self.white_kingside = false,
            (Color::White, CastlingSide::Queenside) => self.white_queenside = false,
            (Color::Black, CastlingSide::Kingside) => self.black_kingside = false,
            (Color::Black, CastlingSide::Queenside) => self.black_queenside = false,
        }
    }

    pub fn clear_color(&mut self, color: Color) {
        self.clear(color, CastlingSide::Kingside);
        self.clear(color, CastlingSide::Queenside);
    }
}

/// Derived classification of a position for the side to move.
///
/// Recomputed by `update_result`; not authoritative in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultStatus {
    /// Square of the checked king, if the side to move is in check.
    pub check: Option<Square>,
    pub stalemate: bool,
    pub checkmate: bool,
}

impl ResultStatus {
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::{ChessMove, Color, Piece, PieceKind, Square};

    #[test]
    fn square_index_round_trip_and_bounds() {
        assert_eq!(Square::new(1, 1).index(), Some(0));
        assert_eq!(Square::new(8, 8).index(), Some(63));
        assert_eq!(Square::from_index(28), Square::new(4, 5));
        assert_eq!(Square::new(0, 3).index(), None);
        assert_eq!(Square::new(5, 9).index(), None);
        assert!(!Square::new(-1, 4).is_on_board());
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn square_and_move_display() {
        assert_eq!(Square::new(4, 5).to_string(), "e4");
        assert_eq!(
            ChessMove::new(Square::new(2, 5), Square::new(4, 5)).to_string(),
            "e2e4"
        );
    }

    #[test]
    fn piece_fen_chars() {
        let white_knight = Piece::new(Color::White, PieceKind::Knight);
        assert_eq!(white_knight.fen_char(), 'N');
        assert_eq!(Piece::from_fen_char('q'), Some(Piece::new(Color::Black, PieceKind::Queen)));
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
    }
}
