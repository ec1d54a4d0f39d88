use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::push_slide_moves;
use crate::moves::move_descriptions::ChessMove;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub fn generate_bishop_moves(board: &Board, from: Square, bishop: Piece, out: &mut Vec<ChessMove>) {
    push_slide_moves(board, from, bishop, &BISHOP_DIRECTIONS, out);
}
