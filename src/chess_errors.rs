//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by the validated entry
//! points of the crate: FEN parsing, square/move text parsing and the outer
//! "play a move" operations of `Position` and `GameSession`.
//!
//! Usage guidelines:
//! - Low-level legality queries (`is_legal_displacement`, `can_play_move`,
//!   `get_threats`) never return errors. An illegal or out-of-range move is
//!   simply `false`.
//! - Parsing variants carry the offending text so callers can present it to
//!   end users unchanged.
//! - `IllegalMove` and `EmptySquare` are domain-level rejections raised only
//!   by the validated move entry points.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The FEN string could not be parsed. Nothing is partially applied.
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// A square in file-letter + rank form (for example `e4`) was malformed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    /// A compact coordinate move (for example `e2e4`) was malformed.
    #[error("invalid long algebraic move: {0}")]
    InvalidLongAlgebraic(String),

    /// A SAN token did not match any legal move in the position.
    #[error("invalid standard algebraic move: {0}")]
    InvalidStandardAlgebraic(String),

    /// No piece stands on the square a move was requested from.
    #[error("no piece on square {0}")]
    EmptySquare(Square),

    /// The move is not legal in the current position.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },
}

impl ChessErrors {
    pub(crate) fn invalid_fen(fen: &str, reason: impl Into<String>) -> Self {
        ChessErrors::InvalidFen {
            fen: fen.to_owned(),
            reason: reason.into(),
        }
    }
}
