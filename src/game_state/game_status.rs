//! Terminal and draw classification of the current position.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing { in_check: bool },
    Checkmate { winner: Color },
    Stalemate,
    DrawByRepetition,
    DrawByFiftyMoveRule,
    DrawByInsufficientMaterial,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }

    /// PGN result token.
    pub fn result_token(self) -> &'static str {
        match self {
            GameStatus::Ongoing { .. } => "*",
            GameStatus::Checkmate {
                winner: Color::Light,
            } => "1-0",
            GameStatus::Checkmate {
                winner: Color::Dark,
            } => "0-1",
            GameStatus::Stalemate
            | GameStatus::DrawByRepetition
            | GameStatus::DrawByFiftyMoveRule
            | GameStatus::DrawByInsufficientMaterial => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing { in_check: false } => f.write_str("ongoing"),
            GameStatus::Ongoing { in_check: true } => f.write_str("ongoing, in check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner:?} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::DrawByRepetition => f.write_str("draw by repetition"),
            GameStatus::DrawByFiftyMoveRule => f.write_str("draw by fifty-move rule"),
            GameStatus::DrawByInsufficientMaterial => {
                f.write_str("draw by insufficient material")
            }
        }
    }
}

impl GameState {
    /// True if the side to move is in check.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move())
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.legal_moves().is_empty()
    }

    /// The current position has occurred `repetition_threshold` times with
    /// the same castling rights and no en-passant capture available.
    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.snapshot();
        if current.en_passant.is_some() {
            return false;
        }
        let occurrences = self
            .position_history()
            .iter()
            .filter(|snapshot| **snapshot == current)
            .count();
        occurrences >= self.rules().repetition_threshold
    }

    #[inline]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock() >= self.rules().fifty_move_limit
    }

    /// Kings alone, or kings plus a single knight or bishop.
    pub fn is_insufficient_material(&self) -> bool {
        let mut others = self
            .board()
            .pieces()
            .filter(|(_, piece)| piece.kind != PieceKind::King);
        match (others.next(), others.next()) {
            (None, _) => true,
            (Some((_, piece)), None) => piece.kind.is_minor(),
            _ => false,
        }
    }

    /// Classify the position. Mate and stalemate take precedence over draws.
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_in_check();
        if self.legal_moves().is_empty() {
            return if in_check {
                GameStatus::Checkmate {
                    winner: self.side_to_move().opposite(),
                }
            } else {
                GameStatus::Stalemate
            };
        }

        if self.is_threefold_repetition() {
            GameStatus::DrawByRepetition
        } else if self.is_fifty_move_draw() {
            GameStatus::DrawByFiftyMoveRule
        } else if self.is_insufficient_material() {
            GameStatus::DrawByInsufficientMaterial
        } else {
            GameStatus::Ongoing { in_check }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::GameRules;

    fn play(game: &mut GameState, moves: &[&str]) {
        for text in moves {
            game.commit_move(text.parse().expect("move should parse"))
                .expect("scripted move should be legal");
        }
    }

    #[test]
    fn start_position_is_ongoing() {
        let game = GameState::new_game();
        assert_eq!(game.status(), GameStatus::Ongoing { in_check: false });
        assert_eq!(game.status().result_token(), "*");
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::new_game();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert!(game.is_in_check());
        assert!(game.is_checkmate());
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Dark
            }
        );
        assert_eq!(game.status().result_token(), "0-1");
    }

    #[test]
    fn check_with_an_escape_is_not_mate() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "f7f6", "d1h5"]);
        assert_eq!(game.status(), GameStatus::Ongoing { in_check: true });
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(!game.is_in_check());
        assert!(game.is_stalemate());
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert_eq!(game.status().result_token(), "1/2-1/2");
    }

    #[test]
    fn knight_shuffle_reaches_threefold() {
        let mut game = GameState::new_game();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
        play(&mut game, &shuffle);
        assert!(!game.is_threefold_repetition());
        play(&mut game, &shuffle);
        assert!(game.is_threefold_repetition());
        assert_eq!(game.status(), GameStatus::DrawByRepetition);
    }

    #[test]
    fn repetition_threshold_is_configurable() {
        let mut game = GameState::with_rules(GameRules {
            repetition_threshold: 2,
            ..GameRules::default()
        });
        play(&mut game, &["g1f3", "g8f6", "f3g1", "f6g8"]);
        assert!(game.is_threefold_repetition());
    }

    #[test]
    fn lost_castling_rights_break_repetition() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        // The first king trip costs the rights, so the start never recurs.
        play(
            &mut game,
            &["e1f1", "e8f8", "f1e1", "f8e8", "e1f1", "e8f8", "f1e1", "f8e8"],
        );
        assert!(!game.is_threefold_repetition());
        play(&mut game, &["e1f1", "e8f8", "f1e1", "f8e8"]);
        assert!(game.is_threefold_repetition());
    }

    #[test]
    fn occurrence_with_en_passant_available_is_not_a_repetition() {
        let mut game = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1")
            .expect("FEN should parse");
        play(&mut game, &["d7d5"]);
        assert!(game.en_passant_square().is_some());

        let shuffle = ["e1f1", "e8f8", "f1e1", "f8e8"];
        play(&mut game, &shuffle);
        play(&mut game, &shuffle);
        assert_eq!(game.en_passant_square(), None);
        assert!(!game.is_threefold_repetition());

        play(&mut game, &shuffle);
        assert!(game.is_threefold_repetition());
        assert_eq!(game.status(), GameStatus::DrawByRepetition);
    }

    #[test]
    fn position_with_en_passant_available_never_repeats() {
        let rules = GameRules {
            repetition_threshold: 1,
            ..GameRules::default()
        };
        let mut game = GameState::from_fen_with_rules("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1", rules)
            .expect("FEN should parse");
        play(&mut game, &["d7d5"]);
        assert!(!game.is_threefold_repetition());

        play(&mut game, &["e1f1"]);
        assert!(game.is_threefold_repetition());
    }

    #[test]
    fn fifty_move_rule_uses_the_clock() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 50 80").expect("FEN should parse");
        assert!(game.is_fifty_move_draw());
        assert_eq!(game.status(), GameStatus::DrawByFiftyMoveRule);

        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 49 80").expect("FEN should parse");
        assert!(!game.is_fifty_move_draw());
    }

    #[test]
    fn fifty_move_limit_is_configurable() {
        let rules = GameRules {
            fifty_move_limit: 100,
            ..GameRules::default()
        };
        let game = GameState::from_fen_with_rules("4k3/8/8/8/8/8/8/R3K3 w - - 60 80", rules)
            .expect("FEN should parse");
        assert!(!game.is_fifty_move_draw());
    }

    #[test]
    fn insufficient_material_cases() {
        let cases = [
            ("4k3/8/8/8/8/8/8/4K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/3NK3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/3bK3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/2NNK3 w - - 0 1", false),
            ("4kb2/8/8/8/8/8/8/3BK3 w - - 0 1", false),
            ("4k3/8/8/8/8/8/8/3RK3 w - - 0 1", false),
            ("4k3/8/8/8/8/8/3P4/4K3 w - - 0 1", false),
        ];
        for (fen, expected) in cases {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            assert_eq!(game.is_insufficient_material(), expected, "{fen}");
        }
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(game.status(), GameStatus::DrawByInsufficientMaterial);
    }
}
