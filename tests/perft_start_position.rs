use chess_referee::game_state::game_state::GameState;
use chess_referee::move_generation::perft::perft;

#[test]
fn start_position_perft_through_depth_four() {
    let mut game = GameState::new_game();
    let expected = [20usize, 400, 8902, 197_281];
    for (depth, nodes) in expected.iter().enumerate() {
        let counts = perft(&mut game, (depth + 1) as u8);
        assert_eq!(counts.nodes, *nodes, "depth {}", depth + 1);
    }
    assert!(game.is_standard_start());
}

#[test]
fn promotion_heavy_position_depth_three() {
    let mut game =
        GameState::from_fen("r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1")
            .expect("FEN should parse");
    assert_eq!(perft(&mut game, 1).nodes, 6);
    assert_eq!(perft(&mut game, 2).nodes, 264);
    assert_eq!(perft(&mut game, 3).nodes, 9467);
}

#[test]
fn discovered_check_position_depth_three() {
    let mut game = GameState::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8")
        .expect("FEN should parse");
    assert_eq!(perft(&mut game, 1).nodes, 44);
    assert_eq!(perft(&mut game, 2).nodes, 1486);
    assert_eq!(perft(&mut game, 3).nodes, 62_379);
}
