//! Square name conversions.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! `Square` values. Internal rank 0 is the far (dark) side, so it maps to
//! rank "8" and internal rank 7 maps to "1".

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert a square to its algebraic name (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file);
    let rank_char = char::from(b'8' - square.rank);
    format!("{file_char}{rank_char}")
}

/// Convert an algebraic name (for example: "e4") to a square.
pub fn algebraic_to_square(name: &str) -> Result<Square, ChessErrors> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(name.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Ok(Square::new(file - b'a', b'8' - rank))
}
