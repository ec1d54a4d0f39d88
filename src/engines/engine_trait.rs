//! Collaborator seams used while driving a game.
//!
//! A [`PromotionSelector`] answers "which piece?" when a submitted move
//! promotes a pawn. A [`Player`] picks whole moves for automated play.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Chooses the piece a pawn becomes on reaching the last rank.
///
/// Only consulted for moves that actually promote. Returning a kind that is
/// not promotable makes the commit fail with
/// [`ChessErrors::InvalidPromotionPiece`](crate::chess_errors::ChessErrors).
pub trait PromotionSelector {
    fn select_promotion(&mut self, game_state: &GameState, from: Square, to: Square) -> PieceKind;
}

impl<F> PromotionSelector for F
where
    F: FnMut(&GameState, Square, Square) -> PieceKind,
{
    fn select_promotion(&mut self, game_state: &GameState, from: Square, to: Square) -> PieceKind {
        self(game_state, from, to)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysQueen;

impl PromotionSelector for AlwaysQueen {
    fn select_promotion(&mut self, _: &GameState, _: Square, _: Square) -> PieceKind {
        PieceKind::Queen
    }
}

/// Always answers with the wrapped kind.
#[derive(Debug, Clone, Copy)]
pub struct FixedPromotion(pub PieceKind);

impl PromotionSelector for FixedPromotion {
    fn select_promotion(&mut self, _: &GameState, _: Square, _: Square) -> PieceKind {
        self.0
    }
}

/// Something that can choose a move for the side to move.
pub trait Player {
    fn name(&self) -> &str;

    /// One of `game_state.legal_moves()`, or `None` when there are none.
    fn choose_move(&mut self, game_state: &GameState) -> Option<ChessMove>;
}
