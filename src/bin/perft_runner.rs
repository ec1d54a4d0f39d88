//! Perft runner for move generator validation.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 5 --fen "<fen>" --divide`
//!
//! Set `CHESS_REFEREE_LOG=trace` to log per-move divide counts.

use std::time::Instant;

use env_logger::Env;

use chess_referee::chess_errors::ChessErrors;
use chess_referee::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_referee::game_state::game_state::GameState;
use chess_referee::move_generation::perft::{perft, perft_divide};
use chess_referee::utils::render_game_state::render_board;

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v;
            }
        }
    }
    default
}

fn parse_arg_string(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn main() -> Result<(), ChessErrors> {
    env_logger::Builder::from_env(Env::default().filter_or("CHESS_REFEREE_LOG", "info")).init();

    let depth = parse_arg_u8("--depth", 4);
    let fen = parse_arg_string("--fen").unwrap_or_else(|| STARTING_POSITION_FEN.to_owned());
    let mut game = GameState::from_fen(&fen)?;

    println!("{}", render_board(game.board()));
    println!("fen: {}", game.get_fen());

    if has_flag("--divide") {
        let mut total = 0usize;
        for (mv, nodes) in perft_divide(&mut game, depth) {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        println!("total: {total}");
        return Ok(());
    }

    for d in 1..=depth {
        let started = Instant::now();
        let counts = perft(&mut game, d);
        let elapsed = started.elapsed();
        let nps = counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9);
        println!(
            "depth={d} nodes={} captures={} ep={} castles={} promotions={} checks={} mates={} elapsed_ms={} nps={:.0}",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            counts.checkmates,
            elapsed.as_millis(),
            nps
        );
    }

    Ok(())
}
