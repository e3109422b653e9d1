use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Board, Color, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &(dr, df) in &KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                if let Some(mv) = self.step_move(from, to, color) {
                    moves.push(mv);
                }
            }
        }
    }
}
