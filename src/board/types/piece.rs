use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of chessman, independent of colour.
///
/// Declaration order doubles as the index into per-piece tables.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

const LETTERS: [char; 6] = ['p', 'n', 'b', 'r', 'q', 'k'];

/// Centipawns; the king's value is only there so material sums stay finite
const VALUES: [i32; 6] = [100, 320, 330, 500, 900, 20_000];

impl Piece {
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Case-insensitive FEN letter
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        let lower = c.to_ascii_lowercase();
        LETTERS
            .iter()
            .position(|&letter| letter == lower)
            .map(|idx| Piece::ALL[idx])
    }

    /// Lowercase letter, as used for promotions in long algebraic notation
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        LETTERS[self.index()]
    }

    /// FEN letter: uppercase for White
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        match color {
            Color::White => self.to_char().to_ascii_uppercase(),
            Color::Black => self.to_char(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        VALUES[self.index()]
    }

    /// Knight, bishop, rook or queen
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, Piece::Pawn | Piece::King)
    }

    /// The pieces the endgame heuristic counts; same set as the promotion targets
    #[inline]
    #[must_use]
    pub const fn is_major_or_minor(self) -> bool {
        self.is_promotion_target()
    }
}

/// Promotion choices, strongest first
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for White, -1 for Black: turns a White-relative score into this side's
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        1 - 2 * (self as i32)
    }

    #[inline]
    pub(crate) const fn back_rank(self) -> usize {
        7 * self.index()
    }

    /// Rank delta of a single pawn push
    #[inline]
    pub(crate) const fn pawn_direction(self) -> isize {
        self.sign() as isize
    }

    #[inline]
    pub(crate) const fn pawn_start_rank(self) -> usize {
        1 + 5 * self.index()
    }

    #[inline]
    pub(crate) const fn pawn_promotion_rank(self) -> usize {
        7 - self.back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}
