use super::constants::{INFINITY, MATE_SCORE};
use super::move_order::order_moves;
use super::negamax::score_to_tt;
use super::{Algorithm, SearchContext, SearchResult};
use crate::board::{Move, MoveList};
use crate::tt::BoundType;

impl SearchContext<'_> {
    /// Deepen from 1 to `max_depth`, keeping the result of the last
    /// iteration that ran to completion.
    pub(crate) fn iterative_deepening(&mut self) -> SearchResult {
        // entries from an earlier call would steer move ordering, so every
        // search starts from an empty table and repeats exactly
        self.state.stats.reset();
        self.state.tt.clear();

        let root_moves = self.board.generate_moves();
        if root_moves.is_empty() {
            let score = if self.board.in_check() { -MATE_SCORE } else { 0 };
            return SearchResult {
                best_move: None,
                score,
                depth: 0,
                nodes: 0,
            };
        }

        let mut best_move: Option<Move> = None;
        let mut best_score = 0;
        let mut completed = 0;

        for depth in 1..=self.config.max_depth.max(1) {
            if depth > 1 && self.time_exhausted() {
                #[cfg(feature = "logging")]
                log::trace!(
                    "time budget spent after depth {completed} ({} ms)",
                    self.start_time.elapsed().as_millis()
                );
                break;
            }

            let (score, mv) = self.search_root(&root_moves, depth as i32, best_move);
            best_move = Some(mv);
            best_score = score;
            completed = depth;
            self.state.stats.completed_depth = depth;

            #[cfg(feature = "logging")]
            log::debug!(
                "depth {depth} score {score} nodes {} best {mv}",
                self.state.stats.nodes + self.state.stats.qnodes
            );
        }

        SearchResult {
            best_move,
            score: best_score,
            depth: completed,
            nodes: self.state.stats.nodes + self.state.stats.qnodes,
        }
    }

    /// One full-window pass over the root moves, previous best first.
    ///
    /// Returns the score from the side to move's point of view and the move
    /// that achieves it. Ties go to the earlier move in search order.
    fn search_root(&mut self, root_moves: &MoveList, depth: i32, previous_best: Option<Move>) -> (i32, Move) {
        let ordered = order_moves(self.board, root_moves, previous_best);
        let sign = self.board.side_to_move().sign();
        let mut alpha = -INFINITY;
        let mut best: Option<(i32, Move)> = None;

        for scored in ordered.iter() {
            let mv = scored.mv;
            self.board.make_move(mv);
            let score = match self.config.algorithm {
                Algorithm::Negamax => -self.negamax(depth - 1, -INFINITY, -alpha, 1),
                Algorithm::Minimax => {
                    let (lo, hi) = if sign > 0 {
                        (alpha, INFINITY)
                    } else {
                        (-INFINITY, -alpha)
                    };
                    sign * self.minimax(depth - 1, lo, hi, 1)
                }
            };
            self.board.unmake_move();

            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, mv));
            }
            alpha = alpha.max(score);
        }

        let (score, mv) = best.expect("root has at least one legal move");
        if self.config.algorithm == Algorithm::Negamax {
            self.state
                .tt
                .store(self.board.hash(), depth as u32, score_to_tt(score, 0), BoundType::Exact, Some(mv));
        }
        (score, mv)
    }
}
