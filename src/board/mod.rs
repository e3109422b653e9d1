//! Chess board representation and game logic.
//!
//! An 8x8 mailbox grid mirrored by per-colour piece maps, with incremental
//! Zobrist hashing and make/unmake through copyable snapshots. Supports full
//! chess rules including castling, en passant, promotions and draw rules.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Board, Color, Piece};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod debug;
mod error;
mod eval;
mod eval_terms;
mod fen;
mod history;
mod make_unmake;
mod movegen;
pub mod prelude;
pub mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use eval::EvalBreakdown;
pub use fen::START_FEN;
pub use state::Board;
pub use status::{DrawReason, GameStatus, FIFTY_MOVE_LIMIT};
pub use types::{CastlingRights, Color, Move, MoveList, Piece, Square, UciMove};

// Public API - search functions and configuration
pub use search::{
    find_best_move, search, Algorithm, SearchConfig, SearchResult, SearchState, SearchStats,
    MATE_SCORE, MATE_THRESHOLD,
};

pub(crate) use types::{ScoredMoveList, PROMOTION_PIECES};
