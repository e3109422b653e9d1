//! Static evaluation.
//!
//! Scores are in centipawns from White's point of view: material, piece-square
//! tables, pawn structure and mobility. A position drawn by rule scores 0.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::eval_terms::tables::pst_value;
use super::{Board, Color};

/// Every evaluation term, White's perspective, for diagnostics and tests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalBreakdown {
    pub material: i32,
    pub piece_square: i32,
    pub pawn_structure: i32,
    pub mobility: i32,
}

impl EvalBreakdown {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.material + self.piece_square + self.pawn_structure + self.mobility
    }
}

impl Board {
    /// Signed material sum (kings cancel out)
    #[must_use]
    pub fn eval_material(&self) -> i32 {
        Color::BOTH
            .iter()
            .map(|&color| {
                color.sign() * self.pieces(color).map(|(_, piece)| piece.value()).sum::<i32>()
            })
            .sum()
    }

    /// Signed piece-square table sum; the king table depends on the endgame flag
    #[must_use]
    pub fn eval_piece_square(&self) -> i32 {
        let endgame = self.is_endgame();
        Color::BOTH
            .iter()
            .map(|&color| {
                color.sign()
                    * self
                        .pieces(color)
                        .map(|(sq, piece)| pst_value(piece, color, sq, endgame))
                        .sum::<i32>()
            })
            .sum()
    }

    /// All terms separately. Unlike [`Board::evaluate`], draw rules are not applied.
    #[must_use]
    pub fn evaluation_breakdown(&self) -> EvalBreakdown {
        EvalBreakdown {
            material: self.eval_material(),
            piece_square: self.eval_piece_square(),
            pawn_structure: self.eval_pawn_structure(),
            mobility: self.eval_mobility(),
        }
    }

    /// Static score in centipawns, positive when White is better.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        if self.is_draw_by_rule() {
            return 0;
        }
        self.evaluation_breakdown().total()
    }

    /// Static score from the side to move's point of view
    #[must_use]
    pub fn evaluate_relative(&self) -> i32 {
        self.side_to_move.sign() * self.evaluate()
    }
}
