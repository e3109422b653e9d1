//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening bounded by depth and an optional wall-clock budget
//! - Negamax alpha-beta, or classical two-sided minimax
//! - Quiescence search with stand-pat over captures
//! - Move ordering (TT move, MVV-LVA, promotions, castling)
//! - Transposition table for move ordering and cutoffs

pub mod constants;
mod iterative;
mod minimax;
mod move_order;
mod negamax;
mod quiescence;

use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tt::{TranspositionTable, DEFAULT_TT_ENTRIES};

use super::{Board, Move};
pub use constants::{MATE_SCORE, MATE_THRESHOLD};
use constants::{DEFAULT_MAX_DEPTH, MAX_QSEARCH_DEPTH};

/// Tree search flavour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Side-to-move relative scores with a single maximising routine
    #[default]
    Negamax,
    /// White maximises and Black minimises; no transposition table
    Minimax,
}

/// Search limits and switches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Deepest full-width iteration
    pub max_depth: u32,
    /// Wall-clock budget, checked between completed iterations
    pub time_limit: Option<Duration>,
    pub algorithm: Algorithm,
    /// Resolve captures at the horizon instead of evaluating statically
    pub use_quiescence: bool,
    /// Capture plies searched beyond the horizon
    pub quiescence_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            time_limit: None,
            algorithm: Algorithm::Negamax,
            use_quiescence: true,
            quiescence_depth: MAX_QSEARCH_DEPTH,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn without_quiescence(mut self) -> Self {
        self.use_quiescence = false;
        self
    }
}

/// Outcome of [`search`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of the deepest completed iteration, side to move's point of view
    pub score: i32,
    /// Deepest completed iteration
    pub depth: u32,
    pub nodes: u64,
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
    pub completed_depth: u32,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Buffers reused across searches: the transposition table and the
/// statistics of the last search.
///
/// Each [`search`] empties the table before it starts, so a reused state
/// gives the same result as a fresh one; after a search the table holds
/// that search's entries for inspection.
pub struct SearchState {
    pub tt: TranspositionTable,
    pub stats: SearchStats,
}

impl SearchState {
    #[must_use]
    pub fn new(tt_entries: usize) -> Self {
        SearchState {
            tt: TranspositionTable::new(tt_entries),
            stats: SearchStats::default(),
        }
    }

    /// Empty the table and reset the statistics.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.stats.reset();
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_TT_ENTRIES)
    }
}

/// Per-search context threaded through the recursive routines
pub(crate) struct SearchContext<'a> {
    pub board: &'a mut Board,
    pub state: &'a mut SearchState,
    pub config: &'a SearchConfig,
    pub start_time: Instant,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(board: &'a mut Board, state: &'a mut SearchState, config: &'a SearchConfig) -> Self {
        SearchContext {
            board,
            state,
            config,
            start_time: Instant::now(),
        }
    }

    fn time_exhausted(&self) -> bool {
        self.config
            .time_limit
            .is_some_and(|limit| self.start_time.elapsed() >= limit)
    }
}

/// Search `board` and return the best move of the deepest completed iteration.
///
/// The board is restored to its original state before returning. The
/// table in `state` is emptied first, so only this search's entries count.
pub fn search(board: &mut Board, state: &mut SearchState, config: &SearchConfig) -> SearchResult {
    let mut ctx = SearchContext::new(board, state, config);
    ctx.iterative_deepening()
}

/// Convenience wrapper: a fixed-depth negamax search with a fresh table.
#[must_use]
pub fn find_best_move(board: &Board, depth: u32) -> Option<Move> {
    let mut board = board.clone();
    let mut state = SearchState::default();
    search(&mut board, &mut state, &SearchConfig::depth(depth)).best_move
}

impl Board {
    /// Search this position; see [`search`].
    pub fn search(&mut self, state: &mut SearchState, config: &SearchConfig) -> SearchResult {
        search(self, state, config)
    }
}
