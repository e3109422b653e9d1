use super::constants::MATE_SCORE;
use super::move_order::order_moves;
use super::SearchContext;
use crate::board::Color;

impl SearchContext<'_> {
    /// Two-sided alpha-beta: White maximises, Black minimises.
    ///
    /// Scores are from White's point of view. The transposition table is
    /// not consulted.
    pub(crate) fn minimax(&mut self, depth: i32, mut alpha: i32, mut beta: i32, ply: i32) -> i32 {
        self.state.stats.nodes += 1;

        if self.board.is_draw_by_rule() {
            return 0;
        }

        let side = self.board.side_to_move();
        if depth <= 0 {
            if !self.config.use_quiescence {
                return self.board.evaluate();
            }
            // Quiescence is side-relative; flip the window for Black.
            return match side {
                Color::White => self.quiescence(alpha, beta, ply, 0),
                Color::Black => -self.quiescence(-beta, -alpha, ply, 0),
            };
        }

        let moves = self.board.generate_moves();
        if moves.is_empty() {
            return if self.board.in_check() {
                -side.sign() * (MATE_SCORE - ply)
            } else {
                0
            };
        }

        let ordered = order_moves(self.board, &moves, None);
        match side {
            Color::White => {
                let mut best = -MATE_SCORE - 1;
                for scored in ordered.iter() {
                    self.board.make_move(scored.mv);
                    let score = self.minimax(depth - 1, alpha, beta, ply + 1);
                    self.board.unmake_move();
                    best = best.max(score);
                    alpha = alpha.max(score);
                    if alpha >= beta {
                        break;
                    }
                }
                best
            }
            Color::Black => {
                let mut best = MATE_SCORE + 1;
                for scored in ordered.iter() {
                    self.board.make_move(scored.mv);
                    let score = self.minimax(depth - 1, alpha, beta, ply + 1);
                    self.board.unmake_move();
                    best = best.min(score);
                    beta = beta.min(score);
                    if alpha >= beta {
                        break;
                    }
                }
                best
            }
        }
    }
}
