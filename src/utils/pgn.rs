//! PGN export for session histories.
//!
//! Writes the seven-tag roster (plus `SetUp`/`FEN` for non-standard roots)
//! followed by the movetext of `MoveHistory::line` and a result token.
//! Reading PGN is not supported.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::session::move_history::MoveHistory;

/// `1-0`, `0-1`, `1/2-1/2` or `*` for the status of `position`.
pub fn result_token(position: &Position) -> &'static str {
    if position.result.checkmate {
        match position.side_to_move {
            Color::White => "0-1",
            Color::Black => "1-0",
        }
    } else if position.result.stalemate {
        "1/2-1/2"
    } else {
        "*"
    }
}

/// Seven-tag roster dated today, with `SetUp`/`FEN` when the history does
/// not start from the standard position.
pub fn default_headers(history: &MoveHistory, result: &str) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Openy Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let root_fen = &history.root().fen;
    if root_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), root_fen.clone());
    }

    headers
}

pub fn write_pgn(history: &MoveHistory, headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");

    let movetext = history.line();
    if !movetext.is_empty() {
        out.push_str(&movetext);
        out.push(' ');
    }
    out.push_str(result);
    out.push('\n');

    out
}

fn normalize_result(result: &str) -> &str {
    match result.trim() {
        "1-0" => "1-0",
        "0-1" => "0-1",
        "1/2-1/2" => "1/2-1/2",
        _ => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
