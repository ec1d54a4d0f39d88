//! Mailbox board: one optional piece per square.
//!
//! The board is a plain `Copy` value so legality checks can play a move on a
//! scratch copy. Mutation is crate-private; outside code only reads it.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// 8×8 grid of occupants, indexed `[rank][file]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

const BACK_RANK_KINDS: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::Light, Color::Dark] {
            let back_rank = color.back_rank();
            let pawn_rank = color.pawn_start_rank();
            for (file, kind) in BACK_RANK_KINDS.iter().enumerate() {
                let file = file as u8;
                board.set(Square::new(file, back_rank), Some(Piece::new(color, *kind)));
                board.set(
                    Square::new(file, pawn_rank),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank as usize][square.file as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Colour of the occupant, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank as usize][square.file as usize] = piece;
    }

    /// Every occupied square in rank-major, then file-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Squares holding `piece`.
    pub fn squares_of(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, occupant)| *occupant == piece)
            .map(|(square, _)| square)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
