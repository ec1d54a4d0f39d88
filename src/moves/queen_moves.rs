use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::rook_moves::generate_rook_moves;

/// Bishop rays first, then rook rays.
pub fn generate_queen_moves(board: &Board, from: Square, queen: Piece, out: &mut Vec<ChessMove>) {
    generate_bishop_moves(board, from, queen, out);
    generate_rook_moves(board, from, queen, out);
}
