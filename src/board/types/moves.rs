//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// One ply: origin, destination and everything needed to replay or undo it.
///
/// Equality and hashing cover every field, so two moves between the same
/// squares that differ in capture or special-move flags are distinct.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    captured: Option<Piece>,
    en_passant: bool,
    castling: bool,
    promotion: Option<Piece>,
}

impl Move {
    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
            en_passant: false,
            castling: false,
            promotion: None,
        }
    }

    /// Create a capture of `captured` standing on `to`
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square, captured: Piece) -> Self {
        Move {
            captured: Some(captured),
            ..Move::quiet(from, to)
        }
    }

    /// Create an en passant capture (`to` is the empty target square)
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            captured: Some(Piece::Pawn),
            en_passant: true,
            ..Move::quiet(from, to)
        }
    }

    /// Create a castling move, expressed as the king's two-square step
    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square) -> Self {
        Move {
            castling: true,
            ..Move::quiet(from, to)
        }
    }

    /// Create a promotion, optionally capturing on the promotion square
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Move {
            captured,
            promotion: Some(piece),
            ..Move::quiet(from, to)
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The type of the captured piece, if any (a pawn for en passant)
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.castling
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.castling && self.to.1 == 6
    }

    /// The piece a pawn promotes to, if this is a promotion
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns true if this move is tactical (capture or promotion)
    #[inline]
    #[must_use]
    pub const fn is_tactical(self) -> bool {
        self.is_capture() || self.is_promotion()
    }

    /// Coordinates-only view, as written in long algebraic notation
    #[inline]
    #[must_use]
    pub const fn coordinates(self) -> UciMove {
        UciMove {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(cap) = self.captured {
            write!(f, " x{}", cap.to_char())?;
        }
        if self.castling {
            write!(f, " castle")?;
        }
        if self.en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.coordinates().fmt(f)
    }
}

/// A move as written in long algebraic notation: `e2e4`, `e7e8q`.
///
/// Carries no capture or special-move flags; resolve it against a position
/// with [`crate::board::Board::parse_move`] to get a full [`Move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UciMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl fmt::Display for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for UciMove {
    type Err = MoveParseError;

    fn from_str(uci: &str) -> Result<Self, Self::Err> {
        let len = uci.chars().count();
        if !(4..=5).contains(&len) {
            return Err(MoveParseError::InvalidLength { len });
        }
        let bad_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        // four-to-five chars but not all ASCII means a non-coordinate char somewhere
        if !uci.is_ascii() {
            return Err(bad_square());
        }

        let from: Square = uci[0..2].parse().map_err(|_| bad_square())?;
        let to: Square = uci[2..4].parse().map_err(|_| bad_square())?;
        let promotion = match uci[4..].chars().next() {
            None => None,
            Some(c @ ('q' | 'r' | 'b' | 'n')) => Piece::from_char(c),
            Some(c) => return Err(MoveParseError::InvalidPromotion { char: c }),
        };

        Ok(UciMove {
            from,
            to,
            promotion,
        })
    }
}

/// List of moves in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(48),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn retain(&mut self, f: impl FnMut(&Move) -> bool) {
        self.moves.retain(f);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.moves.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.moves.len()
        );
        &self.moves[idx]
    }
}

/// A scored move for move ordering.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Moves paired with ordering scores.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScoredMoveList {
    moves: Vec<ScoredMove>,
}

impl ScoredMoveList {
    pub fn with_capacity(capacity: usize) -> Self {
        ScoredMoveList {
            moves: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move, score: i32) {
        self.moves.push(ScoredMove { mv, score });
    }

    /// Sort moves by score in descending order.
    ///
    /// The sort is stable, so equal scores keep generation order and the
    /// search stays deterministic.
    pub fn sort_by_score_desc(&mut self) {
        self.moves.sort_by(|a, b| b.score.cmp(&a.score));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMove> {
        self.moves.iter()
    }
}
