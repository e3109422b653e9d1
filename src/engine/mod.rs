//! Move-choosing agents and the game-facing entry points.
//!
//! Callers outside the core (bots, demos) only need three things: apply a
//! move, ask an [`Agent`] for a move under a [`SearchBudget`], and query the
//! game status.

mod agent;
mod random;

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, GameStatus, Move, MoveError};

pub use agent::SearchAgent;
pub use random::RandomAgent;

/// How much thinking an agent may do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchBudget {
    /// Deepest full-width iteration
    pub depth: u32,
    /// Wall-clock limit, checked between iterations
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchBudget {
            depth,
            time_limit: None,
        }
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Something that picks a move for the side to move.
pub trait Agent {
    /// `None` when the side to move has no legal move.
    fn best_move(&self, board: &Board, budget: SearchBudget) -> Option<Move>;
}

/// Play `mv` if it is legal in `board`.
pub fn apply_move(board: &mut Board, mv: Move) -> Result<(), MoveError> {
    board.apply_move(mv)
}

/// Game status of `board`.
pub fn status(board: &mut Board) -> GameStatus {
    board.status()
}
