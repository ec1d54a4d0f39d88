//! Perft: exhaustive legal-move tree counting for move generator validation.
//!
//! Walks the tree with make/unmake on a single `GameState`, so the state is
//! left exactly as it was found once the walk returns.

use log::trace;

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf nodes (and leaf move categories) `depth` plies below the
/// current position.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    for mv in game_state.legal_moves() {
        perft_recurse(game_state, mv, depth, &mut total);
    }
    total
}

/// Node count below each root move, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(ChessMove, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    game_state
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let mut counts = PerftCounts::default();
            perft_recurse(game_state, mv, depth, &mut counts);
            trace!("perft divide {mv}: {}", counts.nodes);
            (mv, counts.nodes)
        })
        .collect()
}

// `remaining` counts plies including `mv`.
fn perft_recurse(game_state: &mut GameState, mv: ChessMove, remaining: u8, counts: &mut PerftCounts) {
    game_state.make_move(mv);

    if remaining == 1 {
        tally_leaf(game_state, &mv, counts);
    } else {
        for child in game_state.legal_moves() {
            perft_recurse(game_state, child, remaining - 1, counts);
        }
    }

    game_state.unmake_move();
}

fn tally_leaf(game_state: &GameState, mv: &ChessMove, counts: &mut PerftCounts) {
    let mut leaf = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if mv.is_capture() {
        leaf.captures = 1;
    }
    if mv.is_en_passant {
        leaf.en_passant = 1;
    }
    if mv.is_castle {
        leaf.castles = 1;
    }
    if mv.is_promotion() {
        leaf.promotions = 1;
    }
    if game_state.is_in_check() {
        leaf.checks = 1;
        if game_state.legal_moves().is_empty() {
            leaf.checkmates = 1;
        }
    }
    counts.merge(leaf);
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        assert_eq!(
            perft(&mut game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_shallow_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 1).nodes, 20);
        assert_eq!(perft(&mut game, 2).nodes, 400);

        let depth_3 = perft(&mut game, 3);
        assert_eq!(depth_3.nodes, 8902);
        assert_eq!(depth_3.captures, 34);
        assert_eq!(depth_3.checks, 12);
        assert_eq!(depth_3.checkmates, 0);
    }

    #[test]
    fn perft_leaves_the_game_untouched() {
        let mut game = GameState::from_fen(KIWIPETE_FEN).expect("FEN should parse");
        let before = game.clone();
        perft(&mut game, 2);
        assert_eq!(game, before);
    }

    #[test]
    fn kiwipete_counts_special_moves() {
        let mut game = GameState::from_fen(KIWIPETE_FEN).expect("FEN should parse");

        let depth_1 = perft(&mut game, 1);
        assert_eq!(depth_1.nodes, 48);
        assert_eq!(depth_1.captures, 8);
        assert_eq!(depth_1.castles, 2);

        let depth_2 = perft(&mut game, 2);
        assert_eq!(depth_2.nodes, 2039);
        assert_eq!(depth_2.captures, 351);
        assert_eq!(depth_2.en_passant, 1);
        assert_eq!(depth_2.castles, 91);
        assert_eq!(depth_2.checks, 3);
    }

    #[test]
    fn endgame_position_counts() {
        let mut game = GameState::from_fen(POSITION_3_FEN).expect("FEN should parse");
        assert_eq!(perft(&mut game, 1).nodes, 14);
        assert_eq!(perft(&mut game, 2).nodes, 191);

        let depth_3 = perft(&mut game, 3);
        assert_eq!(depth_3.nodes, 2812);
        assert_eq!(depth_3.en_passant, 2);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&mut game, 3);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<usize>(), 8902);
    }
}
