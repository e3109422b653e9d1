//! Search tests to verify the engine finds correct moves in various positions.

use std::time::{Duration, Instant};

use mailbox_chess::board::{
    find_best_move, search, Algorithm, Board, GameStatus, SearchConfig, SearchState, MATE_THRESHOLD,
};

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let best = find_best_move(&board, 4).expect("Should find a move");
    assert_eq!(best.to_string(), "e1e8", "Should find Qe8# (back rank mate)");
}

/// Test that the engine finds a simple mate in 1 with queen
#[test]
fn finds_mate_in_one_queen() {
    let board =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4");
    let best = find_best_move(&board, 3).expect("Should find a move");
    assert_eq!(best.to_string(), "h5f7", "Should find Qxf7# (scholar's mate)");
}

/// Test that mate scores survive iterative deepening
#[test]
fn mate_score_reported() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let mut state = SearchState::new(1 << 12);
    let result = search(&mut board, &mut state, &SearchConfig::depth(3));
    assert!(result.score >= MATE_THRESHOLD, "score {}", result.score);
    assert_eq!(result.depth, 3);
}

/// Test iterative deepening produces legal moves at every depth
#[test]
fn iterative_deepening_consistency() {
    let mut board = Board::new();
    let mut state = SearchState::new(1 << 14);
    let moves = board.generate_moves();

    for depth in 1..=3 {
        let result = search(&mut board, &mut state, &SearchConfig::depth(depth));
        let mv = result.best_move.expect("a move from the start position");
        assert!(moves.contains(&mv), "depth {depth} move should be legal");
        assert_eq!(result.depth, depth);
    }
}

/// Test that search handles single legal move positions
#[test]
fn single_legal_move() {
    // White king on a1 in check from c1; only Kxb2 escapes
    let board = Board::from_fen("k7/8/8/8/8/8/1r6/K1r5 w - - 0 1");
    let best = find_best_move(&board, 3).expect("Should find a move");
    assert_eq!(best.to_string(), "a1b2");
}

/// Test that search returns None for checkmate position
#[test]
fn no_move_in_checkmate() {
    let mut board =
        Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(board.is_checkmate(), "Position should be checkmate");
    assert!(find_best_move(&board, 3).is_none());
}

/// A repeated position is a draw, and the game reports it
#[test]
fn handles_draw_by_repetition() {
    let mut board = Board::new();
    for uci in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"] {
        board.make_move_uci(uci).expect("legal");
    }
    assert!(board.is_draw_by_rule(), "Should be a draw by repetition");
    assert!(matches!(board.status(), GameStatus::Draw(_)));
    assert_eq!(board.evaluate(), 0);
}

/// Test that positions with material advantage evaluate correctly
#[test]
fn evaluation_material_advantage() {
    let white_up = Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let black_up = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1");

    assert!(white_up.evaluate() > 800, "eval: {}", white_up.evaluate());
    assert!(black_up.evaluate() < -800, "eval: {}", black_up.evaluate());
}

/// Minimax and negamax agree on an obvious capture
#[test]
fn algorithms_agree_on_free_rook() {
    let fen = "4k3/8/8/8/3r4/8/8/3QK3 w - - 0 1";
    for algorithm in [Algorithm::Negamax, Algorithm::Minimax] {
        let mut board = Board::from_fen(fen);
        let mut state = SearchState::new(1 << 12);
        let config = SearchConfig::depth(3).with_algorithm(algorithm);
        let result = search(&mut board, &mut state, &config);
        assert_eq!(result.best_move.map(|m| m.to_string()), Some("d1d4".into()), "{algorithm:?}");
    }
}

/// A time budget stops deepening but still returns a move
#[test]
fn time_limited_search_returns_move() {
    let mut board = Board::new();
    let mut state = SearchState::new(1 << 14);
    let config = SearchConfig::depth(20).with_time_limit(Duration::from_millis(50));

    let start = Instant::now();
    let result = search(&mut board, &mut state, &config);

    assert!(result.best_move.is_some());
    assert!(result.depth >= 1 && result.depth < 20);
    assert!(start.elapsed() < Duration::from_secs(60));
}
