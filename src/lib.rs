//! Crate root module declarations for the Openy chess position engine.
//!
//! Exposes the position model, legality and move application, notation
//! codecs, and the undo/redo session so binaries, benches and embedding UIs
//! can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod scoring {
    pub mod material;
}

pub mod session {
    pub mod game_session;
    pub mod move_history;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
    pub mod standard_algebraic;
}

pub use chess_errors::ChessErrors;
pub use game_state::chess_types::{ChessMove, Color, Piece, PieceKind, ResultStatus, Square};
pub use game_state::position::Position;
pub use session::game_session::{GameSession, MoveReport, SessionConfig};
