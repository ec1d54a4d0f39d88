//! Move-log export.
//!
//! `export_move_log` renders the committed moves as numbered long algebraic
//! text. `write_pgn` wraps the same movetext in a PGN header block.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

/// Numbered long algebraic movetext, e.g. "1. e2e4 e7e5 2. g1f3".
///
/// A log that starts with Dark to move opens with "N... ".
pub fn export_move_log(game_state: &GameState) -> String {
    let initial = initial_state(game_state);
    let (mut number, mut side) = (initial.fullmove_number(), initial.side_to_move());
    let mut parts = Vec::with_capacity(game_state.move_log().len() + 1);

    for (ply, mv) in game_state.move_log().iter().enumerate() {
        match side {
            Color::Light => parts.push(format!("{number}. {mv}")),
            Color::Dark if ply == 0 => parts.push(format!("{number}... {mv}")),
            Color::Dark => parts.push(mv.to_string()),
        }
        if side == Color::Dark {
            number += 1;
        }
        side = side.opposite();
    }

    parts.join(" ")
}

/// PGN text for the game so far, with the result taken from its status.
pub fn write_pgn(game_state: &GameState, light_name: &str, dark_name: &str) -> String {
    let result = game_state.status().result_token();

    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", "Casual Game".to_owned());
    headers.insert("Site", "Local".to_owned());
    headers.insert("Date", Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round", "-".to_owned());
    headers.insert("White", light_name.to_owned());
    headers.insert("Black", dark_name.to_owned());
    headers.insert("Result", result.to_owned());

    let initial_fen = initial_state(game_state).get_fen();
    if initial_fen != crate::game_state::chess_rules::STARTING_POSITION_FEN {
        headers.insert("SetUp", "1".to_owned());
        headers.insert("FEN", initial_fen);
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{key} \"{}\"]\n", escape_pgn_value(value)));
    }
    out.push('\n');

    let movetext = export_move_log(game_state);
    if !movetext.is_empty() {
        out.push_str(&movetext);
        out.push(' ');
    }
    out.push_str(result);
    out.push('\n');

    out
}

fn initial_state(game_state: &GameState) -> GameState {
    let mut rewound = game_state.clone();
    while rewound.undo_move().is_some() {}
    rewound
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{export_move_log, write_pgn};
    use crate::game_state::game_state::GameState;

    fn played(start: GameState, moves: &[&str]) -> GameState {
        let mut game = start;
        for text in moves {
            game.commit_move(text.parse().expect("move should parse"))
                .expect("scripted move should be legal");
        }
        game
    }

    #[test]
    fn move_log_is_numbered_per_full_move() {
        let game = played(GameState::new_game(), &["e2e4", "e7e5", "g1f3"]);
        assert_eq!(export_move_log(&game), "1. e2e4 e7e5 2. g1f3");
    }

    #[test]
    fn promotion_suffix_appears_in_log() {
        let start = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let game = played(start, &["a7a8r"]);
        assert_eq!(export_move_log(&game), "1. a7a8r");
    }

    #[test]
    fn log_starting_with_dark_uses_ellipsis() {
        let start = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 12").expect("FEN should parse");
        let game = played(start, &["e8d8", "e1d1", "d8c8"]);
        assert_eq!(export_move_log(&game), "12... e8d8 13. e1d1 d8c8");
    }

    #[test]
    fn pgn_carries_result_and_movetext() {
        let game = played(GameState::new_game(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
        let pgn = write_pgn(&game, "Alice", "Bob");
        assert!(pgn.contains("[White \"Alice\"]"));
        assert!(pgn.contains("[Black \"Bob\"]"));
        assert!(pgn.contains("[Result \"0-1\"]"));
        assert!(!pgn.contains("[FEN"));
        assert!(pgn.trim_end().ends_with("1. f2f3 e7e5 2. g2g4 d8h4 0-1"));
    }

    #[test]
    fn pgn_from_custom_position_records_setup() {
        let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
        let game = played(GameState::from_fen(fen).expect("FEN should parse"), &["e2e4"]);
        let pgn = write_pgn(&game, "White", "Black");
        assert!(pgn.contains("[SetUp \"1\"]"));
        assert!(pgn.contains(&format!("[FEN \"{fen}\"]")));
        assert!(pgn.trim_end().ends_with("1. e2e4 *"));
    }
}
