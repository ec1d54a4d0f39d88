//! Pseudo-legal move generation.
//!
//! Scans the board rank-major, then file-major, and dispatches each friendly
//! piece to its movement rules. King safety is not considered here.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Every geometrically possible move for `side`, in deterministic order.
pub fn generate_pseudo_legal_moves(
    board: &Board,
    side: Color,
    en_passant: Option<Square>,
) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for square in Square::all() {
        generate_pseudo_legal_moves_from(board, square, side, en_passant, &mut out);
    }
    out
}

/// Pseudo-legal moves of the piece on `from`, if it belongs to `side`.
pub fn generate_pseudo_legal_moves_from(
    board: &Board,
    from: Square,
    side: Color,
    en_passant: Option<Square>,
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    if piece.color != side {
        return;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, en_passant, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, out),
        PieceKind::King => generate_king_moves(board, from, piece, out),
    }
}
