//! Benchmarks for the mailbox engine: generator, evaluator and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::board::{search, Algorithm, Board, SearchConfig, SearchState};
use mailbox_chess::engine::{Agent, RandomAgent, SearchBudget};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ITALIAN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut kiwipete = Board::from_fen(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [("middlegame", ITALIAN), ("kiwipete", KIWIPETE)] {
        let mut board = Board::from_fen(fen);
        group.bench_function(BenchmarkId::new("legal", name), |b| {
            b.iter(|| black_box(board.generate_moves()))
        });
        group.bench_function(BenchmarkId::new("pseudo_legal", name), |b| {
            b.iter(|| black_box(board.pseudo_legal_moves()))
        });
        group.bench_function(BenchmarkId::new("captures", name), |b| {
            b.iter(|| black_box(board.generate_captures()))
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        ("startpos", mailbox_chess::board::START_FEN),
        ("middlegame", ITALIAN),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1"),
    ];

    for (name, fen) in positions {
        let board = Board::from_fen(fen);
        group.bench_with_input(BenchmarkId::new("evaluate", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate()))
        });
        group.bench_with_input(BenchmarkId::new("breakdown", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluation_breakdown()))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for algorithm in [Algorithm::Negamax, Algorithm::Minimax] {
        for depth in [2, 3] {
            let id = BenchmarkId::new(format!("{algorithm:?}"), depth);
            group.bench_with_input(id, &depth, |b, &depth| {
                b.iter(|| {
                    let mut board = Board::from_fen(ITALIAN);
                    let mut state = SearchState::new(1 << 16);
                    let config = SearchConfig::depth(depth).with_algorithm(algorithm);
                    search(&mut board, &mut state, &config)
                })
            });
        }
    }

    group.finish();
}

fn bench_random_agent(c: &mut Criterion) {
    let agent = RandomAgent::seeded(42);
    let board = Board::from_fen(KIWIPETE);
    c.bench_function("random_agent", |b| {
        b.iter(|| black_box(agent.best_move(&board, SearchBudget::default())))
    });
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_eval,
    bench_search,
    bench_random_agent
);
criterion_main!(benches);
