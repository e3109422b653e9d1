//! Search-backed agent.

use parking_lot::Mutex;

use super::{Agent, SearchBudget};
use crate::board::{Algorithm, Board, Move, SearchConfig, SearchResult, SearchState};
use crate::tt::DEFAULT_TT_ENTRIES;

/// Picks moves with iterative-deepening alpha-beta.
///
/// The transposition table allocation is kept between calls but emptied at
/// the start of every search, so the same question always gets the same
/// answer. Concurrent callers are serialised.
pub struct SearchAgent {
    state: Mutex<SearchState>,
    algorithm: Algorithm,
    use_quiescence: bool,
}

impl SearchAgent {
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_tt_entries(algorithm, DEFAULT_TT_ENTRIES)
    }

    #[must_use]
    pub fn with_tt_entries(algorithm: Algorithm, tt_entries: usize) -> Self {
        SearchAgent {
            state: Mutex::new(SearchState::new(tt_entries)),
            algorithm,
            use_quiescence: true,
        }
    }

    /// Evaluate statically at the horizon instead of resolving captures.
    #[must_use]
    pub fn without_quiescence(mut self) -> Self {
        self.use_quiescence = false;
        self
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn config(&self, budget: SearchBudget) -> SearchConfig {
        let mut config = SearchConfig::depth(budget.depth).with_algorithm(self.algorithm);
        if let Some(limit) = budget.time_limit {
            config = config.with_time_limit(limit);
        }
        if !self.use_quiescence {
            config = config.without_quiescence();
        }
        config
    }

    /// Full search result (move, score, depth reached) on a copy of `board`.
    pub fn analyze(&self, board: &Board, budget: SearchBudget) -> SearchResult {
        let mut board = board.clone();
        let config = self.config(budget);
        let mut state = self.state.lock();
        board.search(&mut state, &config)
    }

    /// Empty the table and statistics now rather than at the next search.
    pub fn reset(&self) {
        self.state.lock().clear();
    }
}

impl Default for SearchAgent {
    fn default() -> Self {
        Self::new(Algorithm::Negamax)
    }
}

impl Agent for SearchAgent {
    fn best_move(&self, board: &Board, budget: SearchBudget) -> Option<Move> {
        let result = self.analyze(board, budget);

        #[cfg(feature = "logging")]
        {
            match result.best_move {
                Some(mv) => log::info!(
                    "{:?} chose {mv} (depth {}, score {})",
                    self.algorithm,
                    result.depth,
                    result.score
                ),
                None => log::info!("{:?} found no legal move", self.algorithm),
            }
        }

        result.best_move
    }
}
