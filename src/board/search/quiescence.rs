use super::constants::MATE_SCORE;
use super::move_order::order_moves;
use super::SearchContext;

impl SearchContext<'_> {
    /// Capture-only search past the horizon.
    ///
    /// Fail-hard: the result always lies in `[alpha, beta]`.
    pub(crate) fn quiescence(&mut self, mut alpha: i32, beta: i32, ply: i32, qdepth: u32) -> i32 {
        self.state.stats.qnodes += 1;

        if self.board.is_draw_by_rule() {
            return 0.clamp(alpha, beta);
        }
        if !self.board.has_legal_moves() {
            let score = if self.board.in_check() {
                -MATE_SCORE + ply
            } else {
                0
            };
            return score.clamp(alpha, beta);
        }

        let stand_pat = self.board.evaluate_relative();
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }
        if qdepth >= self.config.quiescence_depth {
            return alpha;
        }

        let captures = self.board.generate_captures();
        let ordered = order_moves(self.board, &captures, None);
        for scored in ordered.iter() {
            self.board.make_move(scored.mv);
            let score = -self.quiescence(-beta, -alpha, ply + 1, qdepth + 1);
            self.board.unmake_move();

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
