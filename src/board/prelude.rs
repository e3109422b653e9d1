//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    find_best_move, search, Algorithm, Board, BoardBuilder, CastlingRights, Color, FenError,
    GameStatus, Move, MoveError, MoveList, MoveParseError, Piece, SearchConfig, SearchState,
    Square, SquareError,
};
