//! Square attack detection on the mailbox grid.

use super::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) const ORTHOGONAL_DIRS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
pub(crate) const DIAGONAL_DIRS: [(isize, isize); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

impl Board {
    /// First occupied square along a ray from `from` (exclusive), with its occupant
    pub(crate) fn first_blocker(
        &self,
        from: Square,
        (dr, df): (isize, isize),
    ) -> Option<(Square, Color, Piece)> {
        let mut sq = from;
        while let Some(next) = sq.offset(dr, df) {
            if let Some((color, piece)) = self.piece_at(next) {
                return Some((next, color, piece));
            }
            sq = next;
        }
        None
    }

    /// Returns true if any piece of `by` attacks `sq`, whoever is to move.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let holds = |target: Option<Square>, piece: Piece| {
            target.is_some_and(|t| self.piece_at(t) == Some((by, piece)))
        };

        // a pawn of `by` attacks diagonally forward, so look one rank behind
        let back = -by.pawn_direction();
        if holds(sq.offset(back, -1), Piece::Pawn) || holds(sq.offset(back, 1), Piece::Pawn) {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(dr, df)| holds(sq.offset(dr, df), Piece::Knight))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&(dr, df)| holds(sq.offset(dr, df), Piece::King))
        {
            return true;
        }

        let ray_hits = |dirs: &[(isize, isize)], slider: Piece| {
            dirs.iter().any(|&dir| {
                matches!(
                    self.first_blocker(sq, dir),
                    Some((_, color, piece)) if color == by && (piece == slider || piece == Piece::Queen)
                )
            })
        };

        ray_hits(&ORTHOGONAL_DIRS, Piece::Rook) || ray_hits(&DIAGONAL_DIRS, Piece::Bishop)
    }

    /// Returns true if `color`'s king is attacked. A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Returns true if the side to move is in check
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }
}
