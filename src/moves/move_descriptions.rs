//! Move values and move identity.
//!
//! A `ChessMove` fully describes one ply so it can be applied and reverted
//! without consulting any other state. `MoveId` is the lookup key used when a
//! collaborator submits a move: origin, destination and promotion piece.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::castling_geometry;
use crate::game_state::chess_types::{CastleSide, Piece, PieceKind, Square};
use crate::utils::long_algebraic::{move_id_to_long_algebraic, parse_long_algebraic};

/// Identity of a move. Promotions to different pieces are distinct moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveId {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveId {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_id_to_long_algebraic(*self))
    }
}

impl FromStr for MoveId {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_long_algebraic(s)
    }
}

/// One ply, with everything needed to make and unmake it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    /// For en passant this is the captured pawn, which does not stand on `to`.
    pub piece_captured: Option<Piece>,
    pub is_castle: bool,
    pub is_en_passant: bool,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    /// Plain move or capture.
    #[inline]
    pub const fn new(from: Square, to: Square, piece_moved: Piece, piece_captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            piece_moved,
            piece_captured,
            is_castle: false,
            is_en_passant: false,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promoting(
        from: Square,
        to: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
        promotion: PieceKind,
    ) -> Self {
        Self {
            promotion: Some(promotion),
            ..Self::new(from, to, piece_moved, piece_captured)
        }
    }

    #[inline]
    pub const fn castle(from: Square, to: Square, king: Piece) -> Self {
        Self {
            is_castle: true,
            ..Self::new(from, to, king, None)
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square, pawn: Piece, victim: Piece) -> Self {
        Self {
            is_en_passant: true,
            ..Self::new(from, to, pawn, Some(victim))
        }
    }

    #[inline]
    pub const fn id(&self) -> MoveId {
        MoveId {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.from.rank.abs_diff(self.to.rank) == 2
    }

    /// Piece standing on `to` once the move is made.
    #[inline]
    pub const fn placed_piece(&self) -> Piece {
        match self.promotion {
            Some(kind) => Piece::new(self.piece_moved.color, kind),
            None => self.piece_moved,
        }
    }

    /// Square the captured piece is removed from.
    #[inline]
    pub const fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square::new(self.to.file, self.from.rank)
        } else {
            self.to
        }
    }

    pub fn castle_side(&self) -> Option<CastleSide> {
        if !self.is_castle {
            return None;
        }
        if self.to.file > self.from.file {
            Some(CastleSide::KingSide)
        } else {
            Some(CastleSide::QueenSide)
        }
    }

    /// Rook origin and destination for castling moves.
    pub fn castling_rook_squares(&self) -> Option<(Square, Square)> {
        let side = self.castle_side()?;
        let geometry = castling_geometry(self.piece_moved.color, side);
        Some((geometry.rook_from, geometry.rook_to))
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id().fmt(f)
    }
}
