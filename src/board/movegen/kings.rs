use super::super::attacks::KING_OFFSETS;
use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &(dr, df) in &KING_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                if let Some(mv) = self.step_move(from, to, color) {
                    moves.push(mv);
                }
            }
        }
        self.generate_castling_moves(from, color, moves);
    }

    /// Castling needs the right, king and rook on their home squares, empty
    /// squares between them, and no attack on the king's start, transit or
    /// destination square.
    fn generate_castling_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let back_rank = color.back_rank();
        if from != Square(back_rank, 4) {
            return;
        }
        let enemy = color.opponent();
        let safe = |file: usize| !self.is_square_attacked(Square(back_rank, file), enemy);
        let empty = |files: &[usize]| files.iter().all(|&f| self.is_empty(Square(back_rank, f)));
        let rook_home = |file: usize| self.piece_at(Square(back_rank, file)) == Some((color, Piece::Rook));

        if self.castling_rights.has(color, true)
            && rook_home(7)
            && empty(&[5, 6])
            && safe(4)
            && safe(5)
            && safe(6)
        {
            moves.push(Move::castle(from, Square(back_rank, 6)));
        }

        if self.castling_rights.has(color, false)
            && rook_home(0)
            && empty(&[1, 2, 3])
            && safe(4)
            && safe(3)
            && safe(2)
        {
            moves.push(Move::castle(from, Square(back_rank, 2)));
        }
    }
}
