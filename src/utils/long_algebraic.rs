//! Compact coordinate moves ("e2e4").
//!
//! Four characters, origin then destination. No promotion suffix: a pawn
//! reaching the last rank always becomes a queen.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<ChessMove, ChessErrors> {
    if long_algebraic.len() != 4 || !long_algebraic.is_ascii() {
        return Err(ChessErrors::InvalidLongAlgebraic(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])
        .map_err(|_| ChessErrors::InvalidLongAlgebraic(long_algebraic.to_owned()))?;
    let to = algebraic_to_square(&long_algebraic[2..4])
        .map_err(|_| ChessErrors::InvalidLongAlgebraic(long_algebraic.to_owned()))?;

    Ok(ChessMove::new(from, to))
}

pub fn move_to_long_algebraic(mv: ChessMove) -> Result<String, ChessErrors> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{ChessMove, Square};

    #[test]
    fn long_algebraic_round_trip_simple_move() {
        let mv = long_algebraic_to_move("e2e4").expect("e2e4 should parse");
        assert_eq!(mv, ChessMove::new(Square::new(2, 5), Square::new(4, 5)));
        assert_eq!(move_to_long_algebraic(mv).expect("move should serialize"), "e2e4");
    }

    #[test]
    fn promotion_suffix_is_not_recognized() {
        assert_eq!(
            long_algebraic_to_move("e7e8q"),
            Err(ChessErrors::InvalidLongAlgebraic("e7e8q".to_owned()))
        );
    }

    #[test]
    fn malformed_moves_are_rejected() {
        for text in ["", "e2", "e2e9", "i2e4", "e2-e4", "é2e4"] {
            assert!(long_algebraic_to_move(text).is_err(), "{text:?} should be rejected");
        }
        assert!(move_to_long_algebraic(ChessMove::new(Square::new(0, 0), Square::new(1, 1))).is_err());
    }
}
