use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A grid coordinate `(rank, file)`, both `0..8`.
///
/// Rank 0 is White's back rank and file 0 the a-file, so `Square::new(0, 4)`
/// is e1. Squares order a1, b1, ..., h1, a2, ..., h8, which is the order the
/// piece maps iterate in.
///
/// Outside the crate a square can only come from a checked constructor, so
/// every `Square` indexes the grid safely:
///
/// ```compile_fail
/// use mailbox_chess::board::Square;
///
/// let off_board = Square(8, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Square(pub(crate) usize, pub(crate) usize);

impl Square {
    /// `None` unless both coordinates are on the board
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        (rank < 8 && file < 8).then_some(Square(rank, file))
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Same file, mirrored rank (e2 becomes e7)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(7 - self.0, self.1)
    }

    /// a1 = 0 up to h8 = 63
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// The square `dr` ranks and `df` files away, if still on the board
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Self> {
        let rank = self.0.checked_add_signed(dr)?;
        let file = self.1.checked_add_signed(df)?;
        Square::new(rank, file)
    }

    /// a1 is dark, h1 light
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.0 + self.1) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.1 as u8);
        write!(f, "{file}{}", self.0 + 1)
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        match (rank < 8, file < 8) {
            (false, _) => Err(SquareError::RankOutOfBounds { rank }),
            (_, false) => Err(SquareError::FileOutOfBounds { file }),
            _ => Ok(Square(rank, file)),
        }
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.0, sq.1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Algebraic coordinates, lowercase file then rank: `e4`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match *s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Square(usize::from(rank - b'1'), usize::from(file - b'a')))
            }
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}
