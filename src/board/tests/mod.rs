//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generator verification by leaf counts
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Search results and determinism
//! - `proptest.rs` - Property-based tests

mod perft;

use crate::board::{Board, Move, Piece, Square};

pub(super) fn find_move(board: &mut Board, from: Square, to: Square, promotion: Option<Piece>) -> Move {
    for m in board.generate_moves().iter() {
        if m.from() == from && m.to() == to && m.promotion_piece() == promotion {
            return *m;
        }
    }
    panic!("Expected move not found");
}

/// Play a sequence of coordinate moves, panicking on the first illegal one.
pub(super) fn play(board: &mut Board, moves: &[&str]) {
    for uci in moves {
        board
            .make_move_uci(uci)
            .unwrap_or_else(|e| panic!("{uci} should be legal: {e}"));
    }
}
