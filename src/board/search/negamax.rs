use super::constants::{MATE_SCORE, MATE_THRESHOLD};
use super::move_order::order_moves;
use super::SearchContext;
use crate::board::Move;
use crate::tt::BoundType;

/// Mate scores are stored relative to the node, not the root, so an entry
/// found at a different ply still reports the right distance to mate.
pub(crate) fn score_to_tt(score: i32, ply: i32) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply
    } else if score <= -MATE_THRESHOLD {
        score - ply
    } else {
        score
    }
}

pub(crate) fn score_from_tt(score: i32, ply: i32) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply
    } else if score <= -MATE_THRESHOLD {
        score + ply
    } else {
        score
    }
}

impl SearchContext<'_> {
    /// Negamax alpha-beta. Scores are from the side to move's point of view.
    pub(crate) fn negamax(&mut self, depth: i32, mut alpha: i32, mut beta: i32, ply: i32) -> i32 {
        self.state.stats.nodes += 1;

        if ply > 0 && self.board.is_draw_by_rule() {
            return 0;
        }

        let hash = self.board.hash();
        let mut tt_move = None;
        if let Some(entry) = self.state.tt.probe(hash) {
            self.state.stats.tt_hits += 1;
            tt_move = entry.best_move();
            if ply > 0 && depth >= 0 && entry.depth() >= depth as u32 {
                let score = score_from_tt(entry.score(), ply);
                match entry.bound_type() {
                    BoundType::Exact => return score,
                    BoundType::LowerBound => alpha = alpha.max(score),
                    BoundType::UpperBound => beta = beta.min(score),
                }
                if alpha >= beta {
                    return score;
                }
            }
        }
        let alpha_orig = alpha;

        if depth <= 0 {
            return if self.config.use_quiescence {
                self.quiescence(alpha, beta, ply, 0)
            } else {
                self.board.evaluate_relative()
            };
        }

        let moves = self.board.generate_moves();
        if moves.is_empty() {
            return if self.board.in_check() {
                -MATE_SCORE + ply
            } else {
                0
            };
        }

        let ordered = order_moves(self.board, &moves, tt_move);
        let mut best_score = -MATE_SCORE - 1;
        let mut best_move: Option<Move> = None;

        for scored in ordered.iter() {
            let mv = scored.mv;
            self.board.make_move(mv);
            let score = -self.negamax(depth - 1, -beta, -alpha, ply + 1);
            self.board.unmake_move();

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        let bound = if best_score <= alpha_orig {
            BoundType::UpperBound
        } else if best_score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.state.tt.store(
            hash,
            depth as u32,
            score_to_tt(best_score, ply),
            bound,
            best_move,
        );

        best_score
    }
}
