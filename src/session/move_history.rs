//! Linear undo/redo history of reached positions.
//!
//! Each entry stores the FEN it reached plus the SAN and compact notation of
//! the move that produced it. Result status is not stored; callers re-parse
//! the FEN of the entry they land on.

use crate::game_state::chess_types::Color;
use crate::utils::fen_parser::parse_turn_and_move_number;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub fen: String,
    /// SAN of the move that produced `fen`; `None` for roots and FEN jumps.
    pub notation: Option<String>,
    pub compact_move: Option<String>,
}

impl HistoryEntry {
    pub fn root(fen: impl Into<String>) -> Self {
        Self {
            fen: fen.into(),
            notation: None,
            compact_move: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl MoveHistory {
    pub fn new(fen: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry::root(fen)],
            index: 0,
        }
    }

    /// Drop everything and start again from a single root entry.
    pub fn set(&mut self, fen: impl Into<String>) {
        self.entries.clear();
        self.entries.push(HistoryEntry::root(fen));
        self.index = 0;
    }

    /// Append a played move. Any redoable entries are discarded first.
    pub fn add(
        &mut self,
        notation: impl Into<String>,
        compact_move: impl Into<String>,
        fen: impl Into<String>,
    ) {
        self.push_entry(HistoryEntry {
            fen: fen.into(),
            notation: Some(notation.into()),
            compact_move: Some(compact_move.into()),
        });
    }

    /// Append a position reached without a move (a FEN jump).
    pub fn add_position(&mut self, fen: impl Into<String>) {
        self.push_entry(HistoryEntry::root(fen));
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry. `None` at the root.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Step forward one entry. `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    #[inline]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[inline]
    pub fn root(&self) -> &HistoryEntry {
        &self.entries[0]
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Move-pair text for the whole history, e.g. `1. f3 e5 2. g4 Qh4#`.
    ///
    /// Numbering comes from the FEN each move was played from. A black move
    /// that does not directly follow its white partner opens with `N. ...`.
    pub fn line(&self) -> String {
        let mut tokens = Vec::<String>::with_capacity(self.entries.len() * 2);
        let mut white_just_moved = false;

        for pair in self.entries.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(notation) = after.notation.as_deref() else {
                white_just_moved = false;
                continue;
            };
            let Some((mover, number)) = parse_turn_and_move_number(&before.fen) else {
                white_just_moved = false;
                tokens.push(notation.to_owned());
                continue;
            };

            match mover {
                Color::White => {
                    tokens.push(format!("{number}."));
                    white_just_moved = true;
                }
                Color::Black if !white_just_moved => {
                    tokens.push(format!("{number}. ..."));
                }
                Color::Black => white_just_moved = false,
            }
            tokens.push(notation.to_owned());
        }

        tokens.join(" ")
    }
}
