use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::push_slide_moves;
use crate::moves::move_descriptions::ChessMove;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (-1, 0), (0, -1), (1, 0)];

pub fn generate_rook_moves(board: &Board, from: Square, rook: Piece, out: &mut Vec<ChessMove>) {
    push_slide_moves(board, from, rook, &ROOK_DIRECTIONS, out);
}
