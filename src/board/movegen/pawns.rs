use super::super::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, captured: Option<Piece>, color: Color) {
    if to.rank() == color.pawn_promotion_rank() {
        for promo in PROMOTION_PIECES {
            moves.push(Move::promotion(from, to, promo, captured));
        }
    } else if let Some(piece) = captured {
        moves.push(Move::capture(from, to, piece));
    } else {
        moves.push(Move::quiet(from, to));
    }
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push_pawn_move(moves, from, one, None, color);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::quiet(from, two));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some((occupant, piece)) if occupant != color => {
                    push_pawn_move(moves, from, target, Some(piece), color);
                }
                Some(_) => {}
                None => {
                    // the target only belongs to the side to move, and the
                    // pawn that skipped over it must still be there
                    let victim = Square(from.rank(), target.file());
                    if color == self.side_to_move
                        && self.en_passant_target == Some(target)
                        && self.piece_at(victim) == Some((color.opponent(), Piece::Pawn))
                    {
                        moves.push(Move::en_passant(from, target));
                    }
                }
            }
        }
    }
}
