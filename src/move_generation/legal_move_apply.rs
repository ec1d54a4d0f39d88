//! Board-level make/unmake and the per-move rule updates.
//!
//! These functions touch only the occupancy grid or the rights value they are
//! given; `GameState` wraps them with logs, clocks and the king cache.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::rook_corner_side;
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
use crate::moves::move_descriptions::ChessMove;

/// Play `mv` on `board`.
pub fn apply_move_to_board(board: &mut Board, mv: &ChessMove) {
    board.set(mv.from, None);
    if mv.is_en_passant {
        board.set(mv.capture_square(), None);
    }
    board.set(mv.to, Some(mv.placed_piece()));

    if let Some((rook_from, rook_to)) = mv.castling_rook_squares() {
        let rook = board.piece_at(rook_from);
        board.set(rook_from, None);
        board.set(rook_to, rook);
    }
}

/// Take `mv` back on `board`. Exact inverse of [`apply_move_to_board`].
pub fn revert_move_on_board(board: &mut Board, mv: &ChessMove) {
    if let Some((rook_from, rook_to)) = mv.castling_rook_squares() {
        let rook = board.piece_at(rook_to);
        board.set(rook_to, None);
        board.set(rook_from, rook);
    }

    board.set(mv.from, Some(mv.piece_moved));
    if mv.is_en_passant {
        board.set(mv.to, None);
        board.set(mv.capture_square(), mv.piece_captured);
    } else {
        board.set(mv.to, mv.piece_captured);
    }
}

/// Rights left after `mv`. They only ever narrow.
pub fn castling_rights_after(rights: CastlingRights, mv: &ChessMove) -> CastlingRights {
    let mut next = rights;
    let mover = mv.piece_moved.color;

    match mv.piece_moved.kind {
        PieceKind::King => next.revoke_all(mover),
        PieceKind::Rook => {
            if let Some(side) = rook_corner_side(mover, mv.from) {
                next.revoke(mover, side);
            }
        }
        _ => {}
    }

    // A rook captured on its corner takes the right with it.
    if let Some(captured) = mv.piece_captured {
        if captured.kind == PieceKind::Rook {
            if let Some(side) = rook_corner_side(captured.color, mv.to) {
                next.revoke(captured.color, side);
            }
        }
    }

    next
}

/// Square an enemy pawn could capture onto after `mv`, if any.
///
/// `board` is the position after the move. A double push only opens the
/// en-passant window when an enemy pawn stands beside the landing square.
pub fn en_passant_target_after(board: &Board, mv: &ChessMove) -> Option<Square> {
    if !mv.is_double_pawn_push() {
        return None;
    }
    let mover = mv.piece_moved.color;
    en_passant_target_if_capturable(board, mover.opposite(), double_push_skipped_square(mv))
}

/// `target` if a pawn of `capturer` is placed to take en passant onto it.
pub fn en_passant_target_if_capturable(
    board: &Board,
    capturer: Color,
    target: Square,
) -> Option<Square> {
    let enemy_pawn = Piece::new(capturer, PieceKind::Pawn);
    let landing = target.offset(0, -capturer.pawn_direction())?;
    let capturable = [-1i8, 1]
        .iter()
        .filter_map(|d_file| landing.offset(*d_file, 0))
        .any(|beside| board.piece_at(beside) == Some(enemy_pawn));
    capturable.then_some(target)
}

#[inline]
fn double_push_skipped_square(mv: &ChessMove) -> Square {
    Square::new(mv.from.file, (mv.from.rank + mv.to.rank) / 2)
}
