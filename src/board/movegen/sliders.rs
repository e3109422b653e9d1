use super::super::attacks::{DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use super::super::{Board, Color, Move, MoveList, Piece, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) fn of(piece: Piece) -> Option<Self> {
        match piece {
            Piece::Bishop => Some(SliderType::Bishop),
            Piece::Rook => Some(SliderType::Rook),
            Piece::Queen => Some(SliderType::Queen),
            _ => None,
        }
    }

    fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &DIAGONAL_DIRS,
            SliderType::Rook => &ORTHOGONAL_DIRS,
            SliderType::Queen => &QUEEN_DIRS,
        }
    }
}

const QUEEN_DIRS: [(isize, isize); 8] = [
    ORTHOGONAL_DIRS[0],
    ORTHOGONAL_DIRS[1],
    ORTHOGONAL_DIRS[2],
    ORTHOGONAL_DIRS[3],
    DIAGONAL_DIRS[0],
    DIAGONAL_DIRS[1],
    DIAGONAL_DIRS[2],
    DIAGONAL_DIRS[3],
];

impl Board {
    /// Walk each ray until the edge or the first occupied square (captured if hostile).
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        for &(dr, df) in slider.directions() {
            let mut sq = from;
            while let Some(to) = sq.offset(dr, df) {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to)),
                    Some((occupant, piece)) => {
                        if occupant != color {
                            moves.push(Move::capture(from, to, piece));
                        }
                        break;
                    }
                }
                sq = to;
            }
        }
    }
}
