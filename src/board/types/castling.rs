#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// FEN letters in field order, paired with the right each one names
const FEN_ORDER: [(Color, bool, char); 4] = [
    (Color::White, true, 'K'),
    (Color::White, false, 'Q'),
    (Color::Black, true, 'k'),
    (Color::Black, false, 'q'),
];

/// The four castling flags, one bit each.
///
/// A flag only records that neither the king nor that rook has moved; whether
/// castling is playable right now is decided by move generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    const MASK: u8 = 0b1111;

    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(Self::MASK)
    }

    /// Bit layout: White kingside, White queenside, Black kingside, Black queenside
    #[inline]
    const fn bit(color: Color, kingside: bool) -> u8 {
        let shift = 2 * color.index() + if kingside { 0 } else { 1 };
        1 << shift
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit(color, kingside) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit(color, kingside);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit(color, kingside);
    }

    /// Drop both of `color`'s rights, as after a king move
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.0 &= !(Self::bit(color, true) | Self::bit(color, false));
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Bits above the four flags are ignored
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & Self::MASK)
    }

    /// FEN castling field: a `KQkq` subset in that order, or `-`
    #[must_use]
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        FEN_ORDER
            .iter()
            .filter(|(color, kingside, _)| self.has(*color, *kingside))
            .map(|(_, _, letter)| *letter)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_field() {
        assert_eq!(CastlingRights::all().to_fen(), "KQkq");
        assert_eq!(CastlingRights::none().to_fen(), "-");

        let mut rights = CastlingRights::all();
        rights.remove_color(Color::White);
        rights.remove(Color::Black, true);
        assert_eq!(rights.to_fen(), "q");
    }

    #[test]
    fn raw_bits_are_masked() {
        assert_eq!(CastlingRights::from_u8(0xff), CastlingRights::all());
        assert_eq!(CastlingRights::all().as_u8(), 0b1111);
    }
}
