//! Attack and check detection.
//!
//! Every "is this square attacked" question in the crate goes through
//! [`square_attacked`]. It looks outward from the target square instead of
//! generating the attacker's whole move list, and it never counts pawn pushes
//! or castling as attacks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::first_piece_on_ray;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_STEPS;
use crate::moves::knight_moves::KNIGHT_JUMPS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// True if any piece of `attacker` could capture on `square`.
pub fn square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let pawn = Piece::new(attacker, PieceKind::Pawn);
    let pawn_rank_delta = -attacker.pawn_direction();
    for d_file in [-1i8, 1] {
        if let Some(from) = square.offset(d_file, pawn_rank_delta) {
            if board.piece_at(from) == Some(pawn) {
                return true;
            }
        }
    }

    if any_piece_at_offsets(board, square, &KNIGHT_JUMPS, Piece::new(attacker, PieceKind::Knight)) {
        return true;
    }

    if any_piece_at_offsets(board, square, &KING_STEPS, Piece::new(attacker, PieceKind::King)) {
        return true;
    }

    if slider_on_rays(board, square, &BISHOP_DIRECTIONS, attacker, PieceKind::Bishop) {
        return true;
    }

    slider_on_rays(board, square, &ROOK_DIRECTIONS, attacker, PieceKind::Rook)
}

/// True if the king of `color` stands on an attacked square.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    square_attacked(game_state.board(), game_state.king_square(color), color.opposite())
}

fn any_piece_at_offsets(board: &Board, square: Square, offsets: &[(i8, i8)], piece: Piece) -> bool {
    offsets.iter().any(|(d_file, d_rank)| {
        square
            .offset(*d_file, *d_rank)
            .is_some_and(|from| board.piece_at(from) == Some(piece))
    })
}

/// `line_kind` is the slider moving along these rays; queens always count.
fn slider_on_rays(
    board: &Board,
    square: Square,
    directions: &[(i8, i8)],
    attacker: Color,
    line_kind: PieceKind,
) -> bool {
    directions.iter().any(|(d_file, d_rank)| {
        matches!(
            first_piece_on_ray(board, square, *d_file, *d_rank),
            Some((_, piece)) if piece.color == attacker
                && (piece.kind == line_kind || piece.kind == PieceKind::Queen)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for (square, piece) in pieces {
            board.set(*square, Some(*piece));
        }
        board
    }

    #[test]
    fn pawns_attack_diagonally_forward_only() {
        // Dark pawn on d7 attacks c6 and e6, not d6.
        let board = board_with(&[(Square::new(3, 1), Piece::new(Color::Dark, PieceKind::Pawn))]);
        assert!(square_attacked(&board, Square::new(2, 2), Color::Dark));
        assert!(square_attacked(&board, Square::new(4, 2), Color::Dark));
        assert!(!square_attacked(&board, Square::new(3, 2), Color::Dark));
        assert!(!square_attacked(&board, Square::new(2, 0), Color::Dark));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let board = board_with(&[
            (Square::new(0, 7), Piece::new(Color::Light, PieceKind::Rook)),
            (Square::new(0, 4), Piece::new(Color::Dark, PieceKind::Knight)),
        ]);
        assert!(square_attacked(&board, Square::new(0, 5), Color::Light));
        assert!(square_attacked(&board, Square::new(0, 4), Color::Light));
        assert!(!square_attacked(&board, Square::new(0, 3), Color::Light));
        assert!(square_attacked(&board, Square::new(7, 7), Color::Light));
    }

    #[test]
    fn queen_attacks_along_both_line_kinds() {
        let board = board_with(&[(Square::new(3, 3), Piece::new(Color::Dark, PieceKind::Queen))]);
        assert!(square_attacked(&board, Square::new(7, 7), Color::Dark));
        assert!(square_attacked(&board, Square::new(3, 7), Color::Dark));
        assert!(!square_attacked(&board, Square::new(4, 5), Color::Dark));
        assert!(!square_attacked(&board, Square::new(7, 7), Color::Light));
    }

    #[test]
    fn knight_and_king_attacks() {
        let board = board_with(&[
            (Square::new(6, 7), Piece::new(Color::Light, PieceKind::Knight)),
            (Square::new(0, 0), Piece::new(Color::Dark, PieceKind::King)),
        ]);
        assert!(square_attacked(&board, Square::new(5, 5), Color::Light));
        assert!(!square_attacked(&board, Square::new(6, 5), Color::Light));
        assert!(square_attacked(&board, Square::new(1, 1), Color::Dark));
        assert!(!square_attacked(&board, Square::new(2, 2), Color::Dark));
    }

    #[test]
    fn start_position_kings_are_not_in_check() {
        let game = GameState::new_game();
        assert!(!is_king_in_check(&game, Color::Light));
        assert!(!is_king_in_check(&game, Color::Dark));
    }
}
