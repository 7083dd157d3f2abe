//! Chess position: piece placement, rights, clocks and derived status.
//!
//! `Position` is a plain value. Speculative "does this move leave my king in
//! check" tests run on a ghost copy (`Position::ghost`) that is mutated and
//! discarded, never on the real position.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::CastlingRules;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::push_move;
use crate::move_generation::legal_move_checks::get_threats;
use crate::move_generation::legal_move_generator::{
    can_play_move, is_legal_displacement, legal_moves, update_result,
};
use crate::scoring::material::count_material;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::standard_algebraic::name_move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // Clocks / move counters.
    pub halfmove_clock: u32,
    pub fullmove_number: u32,

    /// Cache written by `update_result`.
    pub result: ResultStatus,
    pub rules: CastlingRules,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::new_empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            result: ResultStatus::default(),
            rules: CastlingRules::default(),
        }
    }
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial array, white to move.
    pub fn new_game() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut position = Self::new_empty();
        for (file, kind) in (1..=8).zip(BACK_RANK) {
            position.board.set(Square::new(1, file), Piece::new(Color::White, kind));
            position.board.set(Square::new(2, file), Piece::new(Color::White, PieceKind::Pawn));
            position.board.set(Square::new(7, file), Piece::new(Color::Black, PieceKind::Pawn));
            position.board.set(Square::new(8, file), Piece::new(Color::Black, kind));
        }
        position.castling_rights = CastlingRights::ALL;
        position
    }

    /// Parse a FEN and classify the resulting position.
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Self::from_fen_with_rules(fen, CastlingRules::default())
    }

    pub fn from_fen_with_rules(fen: &str, rules: CastlingRules) -> Result<Self, ChessErrors> {
        let mut position = parse_fen(fen)?;
        position.rules = rules;
        position.update_result();
        Ok(position)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Independent deep copy used for hypothesis testing.
    #[inline]
    pub fn ghost(&self) -> Self {
        self.clone()
    }

    #[inline]
    pub fn is_legal_displacement(&self, from: Square, to: Square) -> bool {
        is_legal_displacement(self, from, to)
    }

    #[inline]
    pub fn get_threats(&self, defender: Color, square: Square) -> Vec<Square> {
        get_threats(self, defender, square)
    }

    #[inline]
    pub fn can_play_move(&self, from: Square, to: Square) -> bool {
        can_play_move(self, from, to)
    }

    /// Apply a move without any legality check. Callers own legality.
    #[inline]
    pub fn push_move(&mut self, from: Square, to: Square) {
        push_move(self, from, to);
    }

    #[inline]
    pub fn update_result(&mut self) {
        update_result(self);
    }

    #[inline]
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        legal_moves(self)
    }

    #[inline]
    pub fn name_move(&self, from: Square, to: Square) -> Result<String, ChessErrors> {
        name_move(self, from, to)
    }

    /// White material minus black material.
    #[inline]
    pub fn count_material(&self) -> i32 {
        count_material(self)
    }

    /// Validated move application: legality, then the move, then the
    /// refreshed result status.
    pub fn play_move(&mut self, from: Square, to: Square) -> Result<(), ChessErrors> {
        if !self.board.has(from) {
            return Err(ChessErrors::EmptySquare(from));
        }
        if !self.can_play_move(from, to) {
            return Err(ChessErrors::IllegalMove { from, to });
        }
        self.push_move(from, to);
        self.update_result();
        Ok(())
    }
}
