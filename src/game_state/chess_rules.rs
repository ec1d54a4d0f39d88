//! Canonical chess-rule constants and tunable rule settings.
//!
//! Stores the standard starting position, castling geometry and the
//! `GameRules` configuration consulted by the draw detectors.

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Plies without capture or pawn move that end the game in a draw.
pub const DEFAULT_FIFTY_MOVE_LIMIT: u16 = 50;

/// Occurrences of one position that end the game in a draw.
pub const DEFAULT_REPETITION_THRESHOLD: usize = 3;

/// Rule settings a game is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Halfmove-clock value at which the fifty-move draw triggers.
    pub fifty_move_limit: u16,
    /// Number of identical positions that triggers the repetition draw.
    pub repetition_threshold: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            fifty_move_limit: DEFAULT_FIFTY_MOVE_LIMIT,
            repetition_threshold: DEFAULT_REPETITION_THRESHOLD,
        }
    }
}

/// Square a king of `color` starts the game on.
#[inline]
pub const fn king_home_square(color: Color) -> Square {
    Square::new(4, color.back_rank())
}

/// Fixed squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingGeometry {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Files strictly between king and rook; all must be empty.
    pub empty_files: &'static [u8],
}

impl CastlingGeometry {
    /// Square the king crosses on its way to `king_to`.
    #[inline]
    pub const fn transit(&self) -> Square {
        self.rook_to
    }
}

pub const fn castling_geometry(color: Color, side: CastleSide) -> CastlingGeometry {
    let rank = color.back_rank();
    match side {
        CastleSide::KingSide => CastlingGeometry {
            king_from: Square::new(4, rank),
            king_to: Square::new(6, rank),
            rook_from: Square::new(7, rank),
            rook_to: Square::new(5, rank),
            empty_files: &[5, 6],
        },
        CastleSide::QueenSide => CastlingGeometry {
            king_from: Square::new(4, rank),
            king_to: Square::new(2, rank),
            rook_from: Square::new(0, rank),
            rook_to: Square::new(3, rank),
            empty_files: &[1, 2, 3],
        },
    }
}

/// Castling side whose rook starts on `square`, if it is a rook corner of `color`.
pub fn rook_corner_side(color: Color, square: Square) -> Option<CastleSide> {
    if square.rank != color.back_rank() {
        return None;
    }
    match square.file {
        7 => Some(CastleSide::KingSide),
        0 => Some(CastleSide::QueenSide),
        _ => None,
    }
}
