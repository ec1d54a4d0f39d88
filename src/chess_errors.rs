//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Parsing helpers,
//! move submission and position setup all return `Result<_, ChessErrors>`.
//!
//! Usage guidelines:
//! - Parsing variants (`InvalidAlgebraicString`, `InvalidFENtoken`, ...) are
//!   recoverable and suitable for showing to an end user.
//! - Move submission variants (`IllegalMove`, `RedoPending`) mean the state was
//!   left untouched; the caller can simply pick another move.
//! - `InvalidPromotionPiece` signals a collaborator that broke its contract.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind};
use crate::moves::move_descriptions::MoveId;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A single character of a square or move name was out of range.
    ///
    /// Payload: the offending character (a file outside 'a'..'h' or a rank
    /// outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// A square or move string had the wrong shape.
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// Unexpected token inside a FEN string.
    InvalidFENtoken(char),

    /// FEN string had malformed structure.
    ///
    /// Payload: a short description of what was wrong.
    InvalidFENstringForm(String),

    /// The position does not hold exactly one king of the given colour.
    KingCountMismatch(Color),

    /// The submitted move is not among the legal moves of the position.
    IllegalMove(MoveId),

    /// A move was submitted while undone moves are waiting to be replayed.
    RedoPending,

    /// A promotion selector returned a piece a pawn cannot become.
    InvalidPromotionPiece(PieceKind),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicChar(ch) => write!(f, "invalid algebraic character '{ch}'"),
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid algebraic string \"{s}\""),
            ChessErrors::InvalidFENtoken(ch) => write!(f, "invalid FEN token '{ch}'"),
            ChessErrors::InvalidFENstringForm(msg) => write!(f, "malformed FEN: {msg}"),
            ChessErrors::KingCountMismatch(color) => {
                write!(f, "position must contain exactly one {color:?} king")
            }
            ChessErrors::IllegalMove(id) => write!(f, "illegal move {id}"),
            ChessErrors::RedoPending => {
                write!(f, "cannot commit a move while undone moves are pending")
            }
            ChessErrors::InvalidPromotionPiece(kind) => {
                write!(f, "a pawn cannot promote to {kind:?}")
            }
        }
    }
}

impl Error for ChessErrors {}
