//! Mailbox chess engine core.
//!
//! An 8x8 board with full legality tracking, legal move generation,
//! a heuristic evaluator and a negamax/alpha-beta search with quiescence,
//! a transposition table and iterative deepening.
//!
//! # Example
//! ```
//! use mailbox_chess::engine::{Agent, SearchAgent, SearchBudget};
//! use mailbox_chess::Board;
//!
//! let mut board = Board::new();
//! let agent = SearchAgent::default();
//! let mv = agent.best_move(&board, SearchBudget::depth(2)).unwrap();
//! board.apply_move(mv).unwrap();
//! ```

pub mod board;
pub mod engine;
pub mod tt;
pub mod zobrist;

pub use board::{Board, Color, GameStatus, Move, Piece, Square};
pub use tt::TranspositionTable;
