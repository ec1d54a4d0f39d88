//! Plays one seeded random game to completion and prints the result.
//!
//! Usage:
//! `cargo run --release --bin random_self_play`
//! `cargo run --release --bin random_self_play -- --seed 17 --max-plies 400`

use env_logger::Env;
use log::info;

use chess_referee::chess_errors::ChessErrors;
use chess_referee::engines::engine_random::RandomPlayer;
use chess_referee::engines::engine_trait::Player;
use chess_referee::game_state::chess_types::Color;
use chess_referee::game_state::game_state::GameState;
use chess_referee::utils::pgn::write_pgn;
use chess_referee::utils::render_game_state::render_board;

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), ChessErrors> {
    env_logger::Builder::from_env(Env::default().filter_or("CHESS_REFEREE_LOG", "info")).init();

    let seed = parse_arg_u64("--seed", 1);
    let max_plies = parse_arg_u64("--max-plies", 600) as usize;

    let mut light = RandomPlayer::new(seed);
    let mut dark = RandomPlayer::new(seed.wrapping_add(1));
    let mut game = GameState::new_game();

    while !game.status().is_over() && game.move_log().len() < max_plies {
        let player: &mut dyn Player = match game.side_to_move() {
            Color::Light => &mut light,
            Color::Dark => &mut dark,
        };
        let Some(mv) = player.choose_move(&game) else {
            break;
        };
        game.commit_move(mv.id())?;
    }

    info!("finished after {} plies: {}", game.move_log().len(), game.status());
    println!("{}", render_board(game.board()));
    println!();
    println!("{}", write_pgn(&game, light.name(), dark.name()));

    Ok(())
}
