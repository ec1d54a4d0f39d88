use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::MoveId;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Render a move identity as long algebraic text ("e2e4", "e7e8q").
pub fn move_id_to_long_algebraic(id: MoveId) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(id.from));
    out.push_str(&square_to_algebraic(id.to));
    if let Some(promotion) = id.promotion {
        out.push(promotion.to_char());
    }
    out
}

/// Parse long algebraic text into a move identity.
///
/// Only the shape is checked here; whether the move is legal is decided by
/// the game state it is submitted to.
pub fn parse_long_algebraic(long_algebraic: &str) -> Result<MoveId, ChessErrors> {
    let bytes = long_algebraic.as_bytes();
    if (bytes.len() != 4 && bytes.len() != 5) || !long_algebraic.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;

    let promotion = if bytes.len() == 5 {
        Some(char_to_promotion(bytes[4] as char)?)
    } else {
        None
    };

    Ok(MoveId {
        from,
        to,
        promotion,
    })
}

fn char_to_promotion(ch: char) -> Result<PieceKind, ChessErrors> {
    match PieceKind::from_char(ch) {
        Some(kind) if kind.is_promotable() => Ok(kind),
        _ => Err(ChessErrors::InvalidAlgebraicChar(ch)),
    }
}
