//! Piece placement keyed by square.
//!
//! `Board` behaves as a sparse square -> piece map: an empty slot means an
//! empty square. Off-board squares are never stored; reads return nothing
//! and writes are ignored.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self { squares: [None; 64] }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        square.index().and_then(|idx| self.squares[idx])
    }

    #[inline]
    pub fn has(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Piece) {
        if let Some(idx) = square.index() {
            self.squares[idx] = Some(piece);
        }
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        square.index().and_then(|idx| self.squares[idx].take())
    }

    /// Occupied squares in a1..h8 order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|piece| (Square::from_index(idx), piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn squares_of(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| *p == piece)
            .map(|(square, _)| square)
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.squares_of(piece).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    pub fn king_squares(&self, color: Color) -> Vec<Square> {
        self.squares_of(Piece::new(color, PieceKind::King)).collect()
    }
}
