use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::move_descriptions::ChessMove;

/// Single-step movers (knight, king): each offset is one candidate.
pub fn push_step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for (d_file, d_rank) in offsets {
        let Some(to) = from.offset(*d_file, *d_rank) else {
            continue;
        };
        match board.piece_at(to) {
            None => out.push(ChessMove::new(from, to, piece, None)),
            Some(target) if target.color != piece.color => {
                out.push(ChessMove::new(from, to, piece, Some(target)))
            }
            Some(_) => {}
        }
    }
}

/// Sliders: walk each ray until the edge or the first occupied square.
pub fn push_slide_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for (d_file, d_rank) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(*d_file, *d_rank) {
            match board.piece_at(to) {
                None => out.push(ChessMove::new(from, to, piece, None)),
                Some(target) => {
                    if target.color != piece.color {
                        out.push(ChessMove::new(from, to, piece, Some(target)));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}

/// First occupant met walking from `from` along `(d_file, d_rank)`.
pub fn first_piece_on_ray(
    board: &Board,
    from: Square,
    d_file: i8,
    d_rank: i8,
) -> Option<(Square, Piece)> {
    let mut cursor = from;
    while let Some(next) = cursor.offset(d_file, d_rank) {
        if let Some(piece) = board.piece_at(next) {
            return Some((next, piece));
        }
        cursor = next;
    }
    None
}
