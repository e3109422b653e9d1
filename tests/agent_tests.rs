//! Playing whole games through the public agent interface.

use std::sync::Arc;
use std::thread;

use mailbox_chess::board::{Algorithm, Board, Color, GameStatus};
use mailbox_chess::engine::{self, Agent, RandomAgent, SearchAgent, SearchBudget};

/// Play until the game ends or `max_plies` is reached.
fn play_game(white: &dyn Agent, black: &dyn Agent, budget: SearchBudget, max_plies: usize) -> Board {
    let mut board = Board::new();
    for _ in 0..max_plies {
        if engine::status(&mut board).is_over() {
            break;
        }
        let agent = match board.side_to_move() {
            Color::White => white,
            Color::Black => black,
        };
        let mv = agent.best_move(&board, budget).expect("ongoing game has a move");
        engine::apply_move(&mut board, mv).expect("agents only play legal moves");
    }
    board
}

#[test]
fn random_games_stay_consistent() {
    let white = RandomAgent::seeded(11);
    let black = RandomAgent::seeded(12);
    let board = play_game(&white, &black, SearchBudget::default(), 300);
    board.assert_consistent();
    assert_eq!(board.move_history().count(), board_history_len(&board));
}

fn board_history_len(board: &Board) -> usize {
    let mut copy = board.clone();
    let mut n = 0;
    while copy.undo().is_ok() {
        n += 1;
    }
    assert_eq!(copy, Board::new());
    n
}

#[test]
fn search_agent_beats_random_mover_material() {
    let searcher = SearchAgent::with_tt_entries(Algorithm::Negamax, 1 << 14);
    let random = RandomAgent::seeded(3);
    let board = play_game(&searcher, &random, SearchBudget::depth(2), 40);
    let status = board.clone().status();
    let ahead = board.material(Color::White) >= board.material(Color::Black);
    assert!(
        status == GameStatus::Win(Color::White) || ahead,
        "search agent should not fall behind: {status}, {}",
        board.to_fen()
    );
}

#[test]
fn search_agent_shared_between_threads() {
    let agent = Arc::new(SearchAgent::with_tt_entries(Algorithm::Negamax, 1 << 12));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let agent = Arc::clone(&agent);
            thread::spawn(move || agent.best_move(&Board::new(), SearchBudget::depth(2)))
        })
        .collect();

    let moves: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("search thread panicked"))
        .collect();
    let mut board = Board::new();
    for mv in &moves {
        let mv = mv.expect("start position has moves");
        assert!(board.generate_moves().contains(&mv));
    }
}

#[test]
fn analyze_reports_depth_and_score() {
    let agent = SearchAgent::new(Algorithm::Minimax);
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let result = agent.analyze(&board, SearchBudget::depth(2));
    assert_eq!(result.depth, 2);
    assert_eq!(result.best_move.map(|m| m.to_string()), Some("e1e8".into()));
    assert!(result.score > 0);
}

#[test]
fn same_agent_answers_repeated_questions_alike() {
    let italian = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    let agent = SearchAgent::default();
    for board in [Board::new(), Board::from_fen(italian)] {
        let first = agent.best_move(&board, SearchBudget::depth(2));
        let second = agent.best_move(&board, SearchBudget::depth(2));
        let fresh = SearchAgent::default().best_move(&board, SearchBudget::depth(2));

        assert!(first.is_some());
        assert_eq!(first, second, "{}", board.to_fen());
        assert_eq!(first, fresh, "{}", board.to_fen());
    }
}
