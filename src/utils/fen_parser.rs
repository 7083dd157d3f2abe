//! FEN-to-Position parser.
//!
//! Builds piece placement, rights, en-passant target and clocks from a
//! Forsyth-Edwards Notation string. Malformed input is rejected as a whole
//! with `ChessErrors::InvalidFen`; nothing is partially applied.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_square;

/// Parse the six FEN fields. The result status is left at its default;
/// `Position::from_fen` classifies it.
pub fn parse_fen(fen: &str) -> Result<Position, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::invalid_fen(fen, "missing board layout"))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::invalid_fen(fen, "missing side to move"))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessErrors::invalid_fen(fen, "missing castling rights"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessErrors::invalid_fen(fen, "missing en-passant square"))?;
    let halfmove_part = parts
        .next()
        .ok_or_else(|| ChessErrors::invalid_fen(fen, "missing halfmove clock"))?;
    let fullmove_part = parts
        .next()
        .ok_or_else(|| ChessErrors::invalid_fen(fen, "missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(ChessErrors::invalid_fen(fen, "extra trailing fields"));
    }

    let mut position = Position::new_empty();

    parse_board(fen, board_part, &mut position)?;
    position.side_to_move = parse_side_to_move(side_part)
        .ok_or_else(|| ChessErrors::invalid_fen(fen, format!("invalid side to move '{side_part}'")))?;
    position.castling_rights = parse_castling_rights(castling_part).ok_or_else(|| {
        ChessErrors::invalid_fen(fen, format!("invalid castling rights '{castling_part}'"))
    })?;
    position.en_passant_square = parse_en_passant_square(en_passant_part).ok_or_else(|| {
        ChessErrors::invalid_fen(fen, format!("invalid en-passant square '{en_passant_part}'"))
    })?;
    position.halfmove_clock = halfmove_part
        .parse::<u32>()
        .map_err(|_| ChessErrors::invalid_fen(fen, format!("invalid halfmove clock '{halfmove_part}'")))?;
    position.fullmove_number = fullmove_part
        .parse::<u32>()
        .map_err(|_| ChessErrors::invalid_fen(fen, format!("invalid fullmove number '{fullmove_part}'")))?;

    Ok(position)
}

/// Side to move and fullmove number only, for move-list numbering.
pub fn parse_turn_and_move_number(fen: &str) -> Option<(Color, u32)> {
    let mut parts = fen.split_whitespace();
    let side = parse_side_to_move(parts.nth(1)?)?;
    let number = parts.nth(3)?.parse::<u32>().ok()?;
    Some((side, number))
}

fn parse_board(fen: &str, board_part: &str, position: &mut Position) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::invalid_fen(fen, "board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - fen_rank_idx as i8;
        let mut file = 1i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::invalid_fen(
                        fen,
                        format!("invalid empty-square count '{ch}'"),
                    ));
                }
                file += empty_count as i8;
                if file > 9 {
                    return Err(ChessErrors::invalid_fen(fen, format!("rank {rank} has too many files")));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                ChessErrors::invalid_fen(fen, format!("invalid piece character '{ch}'"))
            })?;

            if file > 8 {
                return Err(ChessErrors::invalid_fen(fen, format!("rank {rank} has too many files")));
            }

            position.board.set(Square::new(rank, file), piece);
            file += 1;
        }

        if file != 9 {
            return Err(ChessErrors::invalid_fen(fen, format!("rank {rank} does not sum to 8 files")));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Option<Color> {
    match side_part {
        "w" => Some(Color::White),
        "b" => Some(Color::Black),
        _ => None,
    }
}

fn parse_castling_rights(castling_part: &str) -> Option<CastlingRights> {
    if castling_part == "-" {
        return Some(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return None,
        }
    }

    Some(rights)
}

/// Outer `None` means malformed; inner `None` means no target (`-`).
fn parse_en_passant_square(en_passant_part: &str) -> Option<Option<Square>> {
    if en_passant_part == "-" {
        return Some(None);
    }

    algebraic_to_square(en_passant_part).ok().map(Some)
}
