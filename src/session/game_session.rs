//! Interactive game session: one position plus its undo/redo history.
//!
//! Every state change goes through here. Moves are validated, named, applied
//! and classified, recorded in the history, and reported to an optional
//! callback. Undo and redo re-parse the FEN of the entry they land on.

use std::fmt;

use tracing::{debug, warn};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{CastlingRules, STARTING_POSITION_FEN};
use crate::game_state::chess_types::{ChessMove, ResultStatus, Square};
use crate::game_state::position::Position;
use crate::session::move_history::MoveHistory;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use crate::utils::pgn::{default_headers, result_token, write_pgn};
use crate::utils::standard_algebraic::standard_algebraic_to_move;

pub const START_FEN_ENV: &str = "OPENY_START_FEN";
pub const CASTLING_RULES_ENV: &str = "OPENY_CASTLING_RULES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub start_fen: String,
    pub rules: CastlingRules,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_fen: STARTING_POSITION_FEN.to_owned(),
            rules: CastlingRules::default(),
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by `OPENY_START_FEN` and `OPENY_CASTLING_RULES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(fen) = lookup(START_FEN_ENV).filter(|fen| !fen.trim().is_empty()) {
            config.start_fen = fen.trim().to_owned();
        }

        if let Some(name) = lookup(CASTLING_RULES_ENV) {
            match CastlingRules::from_name(&name) {
                Some(rules) => config.rules = rules,
                None => warn!(value = %name, "unknown castling rules, keeping {:?}", config.rules),
            }
        }

        config
    }
}

/// What a caller learns after each applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub fen: String,
    pub compact_move: String,
    pub san: String,
    pub status: ResultStatus,
    /// White minus black.
    pub material: i32,
}

pub type MoveCallback = Box<dyn FnMut(&MoveReport)>;

pub struct GameSession {
    position: Position,
    history: MoveHistory,
    rules: CastlingRules,
    callback: Option<MoveCallback>,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("position", &self.position)
            .field("history", &self.history)
            .field("rules", &self.rules)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameSession {
    pub fn new(config: &SessionConfig) -> Result<Self, ChessErrors> {
        let position = Position::from_fen_with_rules(&config.start_fen, config.rules)?;
        let history = MoveHistory::new(position.get_fen());
        debug!(fen = %config.start_fen, rules = ?config.rules, "session started");
        Ok(Self {
            position,
            history,
            rules: config.rules,
            callback: None,
        })
    }

    /// Standard initial array with standard castling rules.
    pub fn new_game() -> Self {
        let position = Position::new_game();
        let history = MoveHistory::new(position.get_fen());
        Self {
            position,
            history,
            rules: CastlingRules::default(),
            callback: None,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Self::new(&SessionConfig {
            start_fen: fen.to_owned(),
            ..SessionConfig::default()
        })
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[inline]
    pub fn rules(&self) -> CastlingRules {
        self.rules
    }

    #[inline]
    pub fn fen(&self) -> String {
        self.position.get_fen()
    }

    #[inline]
    pub fn status(&self) -> ResultStatus {
        self.position.result
    }

    #[inline]
    pub fn material(&self) -> i32 {
        self.position.count_material()
    }

    pub fn set_callback(&mut self, callback: MoveCallback) {
        self.callback = Some(callback);
    }

    /// Replace the position and start a fresh history rooted at `fen`.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), ChessErrors> {
        self.position = Position::from_fen_with_rules(fen, self.rules)?;
        self.history.set(self.position.get_fen());
        debug!(fen, "history reset");
        Ok(())
    }

    /// Jump to `fen` while keeping the history; the jump is an entry with no
    /// move and can be undone like one.
    pub fn push_fen(&mut self, fen: &str) -> Result<(), ChessErrors> {
        self.position = Position::from_fen_with_rules(fen, self.rules)?;
        self.history.add_position(self.position.get_fen());
        debug!(fen, "jumped to position");
        Ok(())
    }

    pub fn play_move(&mut self, from: Square, to: Square) -> Result<MoveReport, ChessErrors> {
        if !self.position.board.has(from) {
            debug!(%from, %to, "rejected move from empty square");
            return Err(ChessErrors::EmptySquare(from));
        }
        if !self.position.can_play_move(from, to) {
            debug!(%from, %to, "rejected illegal move");
            return Err(ChessErrors::IllegalMove { from, to });
        }

        let san = self.position.name_move(from, to)?;
        let compact_move = move_to_long_algebraic(ChessMove::new(from, to))?;

        self.position.push_move(from, to);
        self.position.update_result();

        let fen = self.position.get_fen();
        self.history.add(san.clone(), compact_move.clone(), fen.clone());

        let report = MoveReport {
            fen,
            compact_move,
            san,
            status: self.position.result,
            material: self.position.count_material(),
        };
        debug!(
            san = %report.san,
            mv = %report.compact_move,
            fen = %report.fen,
            checkmate = report.status.checkmate,
            stalemate = report.status.stalemate,
            "move played"
        );

        if let Some(callback) = self.callback.as_mut() {
            callback(&report);
        }

        Ok(report)
    }

    /// Play a compact move such as `e2e4`.
    pub fn play_compact_move(&mut self, compact_move: &str) -> Result<MoveReport, ChessErrors> {
        let mv = long_algebraic_to_move(compact_move)?;
        self.play_move(mv.from, mv.to)
    }

    /// Play a SAN move such as `Nf3` or `O-O`.
    pub fn play_san(&mut self, san: &str) -> Result<MoveReport, ChessErrors> {
        let mv = standard_algebraic_to_move(&self.position, san)?;
        self.play_move(mv.from, mv.to)
    }

    /// Play compact moves in order. Stops at the first failure; moves played
    /// before it stay played.
    pub fn play_line<S: AsRef<str>>(&mut self, compact_moves: &[S]) -> Result<Vec<MoveReport>, ChessErrors> {
        compact_moves
            .iter()
            .map(|mv| self.play_compact_move(mv.as_ref()))
            .collect()
    }

    /// Step back one history entry. Returns `false` at the root.
    pub fn undo(&mut self) -> Result<bool, ChessErrors> {
        let Some(entry) = self.history.undo() else {
            return Ok(false);
        };
        self.position = Position::from_fen_with_rules(&entry.fen, self.rules)?;
        debug!(fen = %entry.fen, "undo");
        Ok(true)
    }

    /// Step forward one history entry. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> Result<bool, ChessErrors> {
        let Some(entry) = self.history.redo() else {
            return Ok(false);
        };
        self.position = Position::from_fen_with_rules(&entry.fen, self.rules)?;
        debug!(fen = %entry.fen, "redo");
        Ok(true)
    }

    #[inline]
    pub fn line(&self) -> String {
        self.history.line()
    }

    /// PGN of the whole history, with the result of the current position.
    pub fn to_pgn(&self) -> String {
        let headers = default_headers(&self.history, result_token(&self.position));
        write_pgn(&self.history, &headers)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{GameSession, MoveReport, SessionConfig, CASTLING_RULES_ENV, START_FEN_ENV};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::{CastlingRules, STARTING_POSITION_FEN};
    use crate::game_state::chess_types::{Color, Square};

    const FOOLS_MATE: [&str; 4] = ["f2f3", "e7e5", "g2g4", "d8h4"];

    #[test]
    fn fools_mate_ends_in_checkmate() {
        let mut session = GameSession::new_game();
        let reports = session.play_line(&FOOLS_MATE).expect("fool's mate should be legal");

        assert_eq!(reports.len(), 4);
        assert_eq!(reports[3].san, "Qh4#");
        assert!(session.status().checkmate);
        assert_eq!(session.status().check, Some(Square::new(1, 5)));
        assert_eq!(session.position().side_to_move, Color::White);
        assert_eq!(session.line(), "1. f3 e5 2. g4 Qh4#");
        assert_eq!(session.material(), 0);

        let pgn = session.to_pgn();
        assert!(pgn.contains("[Result \"0-1\"]"));
        assert!(pgn.ends_with("1. f3 e5 2. g4 Qh4# 0-1\n"));
    }

    #[test]
    fn illegal_moves_leave_the_session_untouched() {
        let mut session = GameSession::new_game();

        assert_eq!(
            session.play_compact_move("e2e5"),
            Err(ChessErrors::IllegalMove {
                from: Square::new(2, 5),
                to: Square::new(5, 5),
            })
        );
        assert_eq!(
            session.play_compact_move("e4e5"),
            Err(ChessErrors::EmptySquare(Square::new(4, 5)))
        );
        assert!(matches!(
            session.play_compact_move("e2e4q"),
            Err(ChessErrors::InvalidLongAlgebraic(_))
        ));

        assert_eq!(session.fen(), STARTING_POSITION_FEN);
        assert_eq!(session.history().entries().len(), 1);
    }

    #[test]
    fn undo_redo_and_branch_discard() {
        let mut session = GameSession::new_game();
        session.play_line(&["e2e4", "e7e5", "g1f3"]).expect("opening should be legal");
        let after_nf3 = session.fen();

        assert!(session.undo().expect("undo should succeed"));
        assert!(session.undo().expect("undo should succeed"));
        assert_eq!(session.position().side_to_move, Color::Black);

        assert!(session.redo().expect("redo should succeed"));
        assert!(session.redo().expect("redo should succeed"));
        assert_eq!(session.fen(), after_nf3);
        assert!(!session.redo().expect("redo at the end should not fail"));

        session.undo().expect("undo should succeed");
        session.play_san("d4").expect("d4 should be legal");
        assert!(!session.redo().expect("redo after a new move should not fail"));
        assert_eq!(session.line(), "1. e4 e5 2. d4");

        while session.undo().expect("undo should succeed") {}
        assert_eq!(session.fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn callback_receives_every_applied_move() {
        let seen: Rc<RefCell<Vec<MoveReport>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut session = GameSession::new_game();
        session.set_callback(Box::new(move |report| sink.borrow_mut().push(report.clone())));

        session.play_compact_move("e2e4").expect("e2e4 should be legal");
        let _ = session.play_compact_move("e2e4");
        session.play_san("Nc6").expect("Nc6 should be legal");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].compact_move, "e2e4");
        assert_eq!(seen[0].san, "e4");
        assert_eq!(
            seen[0].fen,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
        assert_eq!(seen[1].compact_move, "b8c6");
    }

    #[test]
    fn push_fen_keeps_history_and_renumbers() {
        let mut session = GameSession::new_game();
        session.play_compact_move("e2e4").expect("e2e4 should be legal");
        session
            .push_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2")
            .expect("FEN should parse");
        session.play_compact_move("g1f3").expect("g1f3 should be legal");

        assert_eq!(session.history().entries().len(), 4);
        assert_eq!(session.line(), "1. e4 2. Nf3");

        session.undo().expect("undo should succeed");
        assert_eq!(session.position().side_to_move, Color::White);

        assert!(session.push_fen("not a fen").is_err());
        assert_eq!(session.history().entries().len(), 4);
    }

    #[test]
    fn set_fen_resets_history() {
        let mut session = GameSession::new_game();
        session.play_compact_move("d2d4").expect("d2d4 should be legal");
        session.set_fen("4k3/8/8/8/8/8/8/R3K3 b Q - 0 30").expect("FEN should parse");

        assert_eq!(session.history().entries().len(), 1);
        assert!(!session.undo().expect("undo at root should not fail"));
        assert_eq!(session.material(), 5);

        session.play_compact_move("e8d7").expect("e8d7 should be legal");
        assert_eq!(session.line(), "30. ... Kd7");
        assert!(session.to_pgn().contains("[FEN \"4k3/8/8/8/8/8/8/R3K3 b Q - 0 30\"]"));
    }

    #[test]
    fn config_reads_lookup_overrides() {
        let config = SessionConfig::from_lookup(|key| match key {
            START_FEN_ENV => Some("4k3/8/8/8/8/8/8/4K2R w K - 0 1".to_owned()),
            CASTLING_RULES_ENV => Some("legacy".to_owned()),
            _ => None,
        });
        assert_eq!(config.rules, CastlingRules::Legacy);

        let session = GameSession::new(&config).expect("config FEN should parse");
        assert_eq!(session.rules(), CastlingRules::Legacy);
        assert_eq!(session.position().rules, CastlingRules::Legacy);

        let fallback = SessionConfig::from_lookup(|key| match key {
            CASTLING_RULES_ENV => Some("chess960".to_owned()),
            _ => None,
        });
        assert_eq!(fallback, SessionConfig::default());
    }
}
