use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castling_geometry, king_home_square};
use crate::game_state::chess_types::{CastleSide, Piece, Square};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::move_descriptions::ChessMove;

pub const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
];

/// Adjacent steps plus both castling candidates when the king is at home.
///
/// Castling candidates are unchecked here; the legality filter decides them.
pub fn generate_king_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<ChessMove>) {
    push_step_moves(board, from, king, &KING_STEPS, out);

    if from == king_home_square(king.color) {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            let geometry = castling_geometry(king.color, side);
            out.push(ChessMove::castle(from, geometry.king_to, king));
        }
    }
}
