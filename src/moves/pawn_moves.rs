use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square, PROMOTION_KINDS};
use crate::moves::move_descriptions::ChessMove;

/// Pushes, captures, promotions and en passant for one pawn.
///
/// `en_passant` is the square skipped by the enemy's last double push, if
/// that push left a capture available.
pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    pawn: Piece,
    en_passant: Option<Square>,
    out: &mut Vec<ChessMove>,
) {
    let color = pawn.color;
    let direction = color.pawn_direction();

    if let Some(one_step) = from.offset(0, direction) {
        if board.is_empty(one_step) {
            push_pawn_move(from, one_step, pawn, None, out);

            if from.rank == color.pawn_start_rank() {
                if let Some(two_step) = from.offset(0, 2 * direction) {
                    if board.is_empty(two_step) {
                        out.push(ChessMove::new(from, two_step, pawn, None));
                    }
                }
            }
        }
    }

    for d_file in [-1i8, 1] {
        let Some(to) = from.offset(d_file, direction) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != color => {
                push_pawn_move(from, to, pawn, Some(target), out);
            }
            Some(_) => {}
            None => {
                if en_passant != Some(to) || from.rank != color.en_passant_rank() {
                    continue;
                }
                let victim = Piece::new(color.opposite(), PieceKind::Pawn);
                if board.piece_at(Square::new(to.file, from.rank)) == Some(victim) {
                    out.push(ChessMove::en_passant(from, to, pawn, victim));
                }
            }
        }
    }
}

fn push_pawn_move(
    from: Square,
    to: Square,
    pawn: Piece,
    captured: Option<Piece>,
    out: &mut Vec<ChessMove>,
) {
    if to.rank == pawn.color.promotion_rank() {
        for kind in PROMOTION_KINDS {
            out.push(ChessMove::promoting(from, to, pawn, captured, kind));
        }
    } else {
        out.push(ChessMove::new(from, to, pawn, captured));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn light_pawn() -> Piece {
        Piece::new(Color::Light, PieceKind::Pawn)
    }

    fn dark_pawn() -> Piece {
        Piece::new(Color::Dark, PieceKind::Pawn)
    }

    #[test]
    fn start_rank_pawn_may_push_twice() {
        let mut board = Board::empty();
        board.set(Square::new(4, 6), Some(light_pawn()));

        let mut out = Vec::new();
        generate_pawn_moves(&board, Square::new(4, 6), light_pawn(), None, &mut out);
        let targets: Vec<Square> = out.iter().map(|mv| mv.to).collect();
        assert_eq!(targets, vec![Square::new(4, 5), Square::new(4, 4)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump_over() {
        let mut board = Board::empty();
        board.set(Square::new(4, 1), Some(dark_pawn()));
        board.set(Square::new(4, 2), Some(light_pawn()));

        let mut out = Vec::new();
        generate_pawn_moves(&board, Square::new(4, 1), dark_pawn(), None, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn pawn_on_seventh_expands_into_four_promotions() {
        let mut board = Board::empty();
        board.set(Square::new(0, 1), Some(light_pawn()));
        board.set(Square::new(1, 0), Some(Piece::new(Color::Dark, PieceKind::Rook)));

        let mut out = Vec::new();
        generate_pawn_moves(&board, Square::new(0, 1), light_pawn(), None, &mut out);
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|mv| mv.is_promotion()));
        assert_eq!(out.iter().filter(|mv| mv.is_capture()).count(), 4);
    }

    #[test]
    fn en_passant_requires_fifth_rank_and_open_window() {
        let mut board = Board::empty();
        // Light pawn e5, dark pawn just arrived on d5.
        board.set(Square::new(4, 3), Some(light_pawn()));
        board.set(Square::new(3, 3), Some(dark_pawn()));
        let d6 = Square::new(3, 2);

        let mut out = Vec::new();
        generate_pawn_moves(&board, Square::new(4, 3), light_pawn(), Some(d6), &mut out);
        let ep: Vec<&ChessMove> = out.iter().filter(|mv| mv.is_en_passant).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to, d6);
        assert_eq!(ep[0].piece_captured, Some(dark_pawn()));

        out.clear();
        generate_pawn_moves(&board, Square::new(4, 3), light_pawn(), None, &mut out);
        assert!(out.iter().all(|mv| !mv.is_en_passant));
    }
}
