//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (rank, file) board coordinates
//! - `Move`, `UciMove` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, UciMove};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use moves::ScoredMoveList;
pub(crate) use piece::PROMOTION_PIECES;
