use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::move_descriptions::ChessMove;

/// Knight jumps as `(d_file, d_rank)`.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_moves(board: &Board, from: Square, knight: Piece, out: &mut Vec<ChessMove>) {
    push_step_moves(board, from, knight, &KNIGHT_JUMPS, out);
}
