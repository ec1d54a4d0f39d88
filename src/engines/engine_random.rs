//! Random move and promotion choices.
//!
//! Both types own a seeded `StdRng`, so a given seed always replays the same
//! game. Used for self-play, soak tests and the demo binary.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Player, PromotionSelector};
use crate::game_state::chess_types::{PieceKind, Square, PROMOTION_KINDS};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<ChessMove> {
        game_state.legal_moves().as_slice().choose(&mut self.rng).copied()
    }
}

/// Picks uniformly among the four promotion kinds.
pub struct RandomPromotion {
    rng: StdRng,
}

impl RandomPromotion {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PromotionSelector for RandomPromotion {
    fn select_promotion(&mut self, _: &GameState, _: Square, _: Square) -> PieceKind {
        PROMOTION_KINDS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PieceKind::Queen)
    }
}
