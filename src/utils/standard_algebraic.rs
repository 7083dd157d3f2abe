//! Standard algebraic notation (SAN).
//!
//! `name_move` names a legal move in the position it is played from,
//! including disambiguation and the check / mate suffix. The reverse
//! direction resolves a SAN token against the legal moves of a position.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::CastlingPath;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::push_move;
use crate::move_generation::legal_move_generator::{can_play_move, update_result};
use crate::utils::algebraic::algebraic_to_square;

/// SAN for the move `from` -> `to`, which must be legal in `position`.
pub fn name_move(position: &Position, from: Square, to: Square) -> Result<String, ChessErrors> {
    let piece = position.board.get(from).ok_or(ChessErrors::EmptySquare(from))?;
    if !can_play_move(position, from, to) {
        return Err(ChessErrors::IllegalMove { from, to });
    }

    let mut out = String::with_capacity(8);

    if let Some(side) = castling_side(piece, from, to) {
        out.push_str(match side {
            CastlingSide::Kingside => "O-O",
            CastlingSide::Queenside => "O-O-O",
        });
    } else {
        let is_en_passant = piece.kind == PieceKind::Pawn && from.file != to.file && !position.board.has(to);
        let is_capture = position.board.has(to) || is_en_passant;

        match piece.kind.san_letter() {
            Some(letter) => {
                out.push(letter);
                out.push_str(&disambiguation(position, piece, from, to));
            }
            None if is_capture => out.push(from.file_char()),
            None => {}
        }

        if is_capture {
            out.push('x');
        }
        out.push_str(&to.to_string());

        if piece.kind == PieceKind::Pawn && to.rank == piece.color.promotion_rank() {
            out.push_str("=Q");
        }
    }

    let mut ghost = position.ghost();
    push_move(&mut ghost, from, to);
    update_result(&mut ghost);
    if ghost.result.checkmate {
        out.push('#');
    } else if ghost.result.check.is_some() {
        out.push('+');
    }

    Ok(out)
}

/// Resolve a SAN token (for example `Nf3`, `Ng1f3`, `exd5`, `Qh4xf2`, `O-O`,
/// `e8=Q+`) to the single legal move it names.
///
/// Over-specified origins are accepted. A token naming no legal move, or
/// more than one, is rejected.
pub fn standard_algebraic_to_move(position: &Position, san: &str) -> Result<ChessMove, ChessErrors> {
    let invalid = || ChessErrors::InvalidStandardAlgebraic(san.to_owned());
    let token = normalize_san(san);
    let side = position.side_to_move;

    if let Some(castle) = castling_token_side(&token) {
        let path = CastlingPath::new(side, castle);
        let king_home = position.board.get(path.king_from) == Some(Piece::new(side, PieceKind::King));
        if king_home && can_play_move(position, path.king_from, path.king_to) {
            return Ok(ChessMove::new(path.king_from, path.king_to));
        }
        return Err(invalid());
    }

    let fields = parse_san_fields(&token).ok_or_else(invalid)?;
    if fields.promotion && fields.to.rank != side.promotion_rank() {
        return Err(invalid());
    }

    // Origin and capture filters are cheap; full legality runs last.
    let mut origins = position
        .board
        .squares_of(Piece::new(side, fields.kind))
        .filter(|from| fields.from_file.map_or(true, |file| from.file == file))
        .filter(|from| fields.from_rank.map_or(true, |rank| from.rank == rank))
        .filter(|from| !fields.capture || is_capture(position, fields.kind, *from, fields.to))
        .filter(|from| can_play_move(position, *from, fields.to));

    match (origins.next(), origins.next()) {
        (Some(from), None) => Ok(ChessMove::new(from, fields.to)),
        _ => Err(invalid()),
    }
}

/// A SAN token split into the parts that select a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SanFields {
    kind: PieceKind,
    from_file: Option<i8>,
    from_rank: Option<i8>,
    capture: bool,
    to: Square,
    promotion: bool,
}

/// `[KQRBN]? [a-h]? [1-8]? x? [a-h][1-8] Q?` on a normalized token.
fn parse_san_fields(token: &str) -> Option<SanFields> {
    if !token.is_ascii() {
        return None;
    }

    let (kind, rest) = match token.chars().next()? {
        ch if ch.is_ascii_uppercase() => {
            let kind = PieceKind::ALL
                .into_iter()
                .find(|kind| kind.san_letter() == Some(ch))?;
            (kind, &token[1..])
        }
        _ => (PieceKind::Pawn, token),
    };

    let (rest, promotion) = match rest.strip_suffix('Q') {
        Some(bare) if kind == PieceKind::Pawn => (bare, true),
        Some(_) => return None,
        None => (rest, false),
    };

    if rest.len() < 2 {
        return None;
    }
    let (prefix, destination) = rest.split_at(rest.len() - 2);
    let to = algebraic_to_square(destination).ok()?;

    let (prefix, capture) = match prefix.strip_suffix('x') {
        Some(origin) => (origin, true),
        None => (prefix, false),
    };

    let mut from_file = None;
    let mut from_rank = None;
    for ch in prefix.chars() {
        match ch {
            'a'..='h' if from_file.is_none() && from_rank.is_none() => {
                from_file = Some((ch as u8 - b'a') as i8 + 1);
            }
            '1'..='8' if from_rank.is_none() => {
                from_rank = Some((ch as u8 - b'0') as i8);
            }
            _ => return None,
        }
    }

    // A pawn without an origin file is a push along its own file.
    if kind == PieceKind::Pawn && from_file.is_none() {
        from_file = Some(to.file);
    }

    Some(SanFields {
        kind,
        from_file,
        from_rank,
        capture,
        to,
        promotion,
    })
}

fn castling_token_side(token: &str) -> Option<CastlingSide> {
    match token {
        "O-O" => Some(CastlingSide::Kingside),
        "O-O-O" => Some(CastlingSide::Queenside),
        _ => None,
    }
}

fn is_capture(position: &Position, kind: PieceKind, from: Square, to: Square) -> bool {
    position.board.has(to) || (kind == PieceKind::Pawn && from.file != to.file)
}

fn castling_side(piece: Piece, from: Square, to: Square) -> Option<CastlingSide> {
    if piece.kind != PieceKind::King {
        return None;
    }
    CastlingPath::for_king_move(piece.color, from, to).map(|(side, _)| side)
}

/// File, rank or both, whichever is the least that tells the mover apart
/// from every other same-kind piece that can legally reach `to`.
fn disambiguation(position: &Position, piece: Piece, from: Square, to: Square) -> String {
    let rivals: Vec<Square> = position
        .board
        .squares_of(piece)
        .filter(|other| *other != from && can_play_move(position, *other, to))
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|other| other.file != from.file) {
        from.file_char().to_string()
    } else if rivals.iter().all(|other| other.rank != from.rank) {
        from.rank_char().to_string()
    } else {
        from.to_string()
    }
}

fn normalize_san(san: &str) -> String {
    san.trim()
        .trim_end_matches(['+', '#', '!', '?'])
        .replace('0', "O")
        .replace('=', "")
}
