//! Full legal move generation pipeline.
//!
//! Runs the pseudo-legal generator, then filters out castling candidates that
//! fail their preconditions and any move that leaves the mover's king attacked.
//! Simulation happens on a scratch copy of the board, so the game state is
//! never touched while filtering.

use crate::game_state::chess_rules::castling_geometry;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::square_attacked;
use crate::move_generation::move_generator::{
    generate_pseudo_legal_moves, generate_pseudo_legal_moves_from,
};
use crate::moves::move_descriptions::ChessMove;

/// All legal moves for the side to move, in generation order.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut moves = generate_pseudo_legal_moves(
        game_state.board(),
        game_state.side_to_move(),
        game_state.en_passant_square(),
    );
    moves.retain(|mv| is_pseudo_legal_move_legal(game_state, mv));
    moves
}

/// Legal moves of the piece on `from` (empty if it is not the mover's piece).
pub fn generate_legal_moves_from(game_state: &GameState, from: Square) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    generate_pseudo_legal_moves_from(
        game_state.board(),
        from,
        game_state.side_to_move(),
        game_state.en_passant_square(),
        &mut moves,
    );
    moves.retain(|mv| is_pseudo_legal_move_legal(game_state, mv));
    moves
}

/// Legality of a move already known to be pseudo-legal in `game_state`.
pub fn is_pseudo_legal_move_legal(game_state: &GameState, mv: &ChessMove) -> bool {
    if mv.is_castle {
        can_castle(game_state, mv)
    } else {
        leaves_king_safe(game_state, mv)
    }
}

fn can_castle(game_state: &GameState, mv: &ChessMove) -> bool {
    let Some(side) = mv.castle_side() else {
        return false;
    };
    let color = mv.piece_moved.color;
    let enemy = color.opposite();
    let board = game_state.board();
    let geometry = castling_geometry(color, side);

    if !game_state.castling_rights().allows(color, side) {
        return false;
    }
    if mv.from != geometry.king_from
        || board.piece_at(geometry.rook_from)
            != Some(Piece::new(color, PieceKind::Rook))
    {
        return false;
    }

    let rank = geometry.king_from.rank;
    let path_clear = geometry
        .empty_files
        .iter()
        .all(|file| board.is_empty(Square::new(*file, rank)));
    if !path_clear {
        return false;
    }

    [geometry.king_from, geometry.transit(), geometry.king_to]
        .iter()
        .all(|square| !square_attacked(board, *square, enemy))
}

fn leaves_king_safe(game_state: &GameState, mv: &ChessMove) -> bool {
    let mover = mv.piece_moved.color;
    let mut scratch = *game_state.board();
    apply_move_to_board(&mut scratch, mv);

    let king_square = if mv.piece_moved.kind == PieceKind::King {
        mv.to
    } else {
        game_state.king_square(mover)
    };
    !square_attacked(&scratch, king_square, mover.opposite())
}
