//! Mobility evaluation.
//!
//! Counts pseudo-legal moves per side. King moves only count in the endgame,
//! where the king is an active piece.

use crate::board::state::Board;
use crate::board::types::{Color, Piece};

use super::tables::MOBILITY_WEIGHT;

impl Board {
    /// Pseudo-legal move count for `color`, king moves dropped outside the endgame
    pub(crate) fn mobility_count(&self, color: Color) -> i32 {
        let endgame = self.is_endgame();
        let count = self
            .pseudo_legal_moves_for(color)
            .iter()
            .filter(|mv| endgame || self.piece_on(mv.from()) != Some(Piece::King))
            .count();
        i32::try_from(count).unwrap_or(i32::MAX)
    }

    /// Evaluate mobility from White's perspective.
    #[must_use]
    pub fn eval_mobility(&self) -> i32 {
        MOBILITY_WEIGHT * (self.mobility_count(Color::White) - self.mobility_count(Color::Black))
    }
}
