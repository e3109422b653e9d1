//! Uniformly random legal moves.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{Agent, SearchBudget};
use crate::board::{Board, Move};

/// Plays a uniformly random legal move; the budget is ignored.
pub struct RandomAgent {
    rng: Mutex<StdRng>,
}

impl RandomAgent {
    /// Reproducible move sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        RandomAgent {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl Agent for RandomAgent {
    fn best_move(&self, board: &Board, _budget: SearchBudget) -> Option<Move> {
        let mut board = board.clone();
        let moves = board.generate_moves();
        let mv = moves.as_slice().choose(&mut *self.rng.lock()).copied();

        #[cfg(feature = "logging")]
        {
            if let Some(mv) = mv {
                log::info!("random agent chose {mv}");
            }
        }

        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let a = RandomAgent::seeded(7);
        let b = RandomAgent::seeded(7);
        for _ in 0..5 {
            assert_eq!(
                a.best_move(&board, SearchBudget::default()),
                b.best_move(&board, SearchBudget::default())
            );
        }
    }

    #[test]
    fn test_no_move_when_mated() {
        // fool's mate
        let board = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        let agent = RandomAgent::seeded(1);
        assert_eq!(agent.best_move(&board, SearchBudget::default()), None);
    }
}
