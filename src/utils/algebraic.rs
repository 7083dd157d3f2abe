//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values, reused by the FEN, compact-move and SAN codecs.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicSquare(square.to_owned()));
    }

    Ok(Square::new((rank - b'0') as i8, (file - b'a') as i8 + 1))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if !square.is_on_board() {
        return Err(ChessErrors::InvalidAlgebraicSquare(format!(
            "({}, {})",
            square.rank, square.file
        )));
    }
    Ok(square.to_string())
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::new(1, 1));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::new(8, 8));
        assert_eq!(algebraic_to_square("e3").expect("e3 should parse"), Square::new(3, 5));
        assert_eq!(square_to_algebraic(Square::new(1, 1)).expect("a1 should convert"), "a1");
        assert_eq!(square_to_algebraic(Square::new(6, 4)).expect("d6 should convert"), "d6");
    }

    #[test]
    fn rejects_malformed_squares() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("E4").is_err());
        assert!(square_to_algebraic(Square::new(0, 1)).is_err());
    }
}
