//! Zobrist hashing for chess positions.
//!
//! Provides incrementally-updatable 64-bit reduced position keys: piece
//! placement, side to move, castling flags and en passant file. Clocks are
//! not part of the key, so repeated positions hash identically.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece][color][square index]
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move_key: u64,
    // castling_keys[color][0 = kingside, 1 = queenside]
    castling_keys: [[u64; 2]; 2],
    // only the file of the en passant target matters
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.as_index()]
    }

    #[inline]
    pub(crate) fn side(&self) -> u64 {
        self.black_to_move_key
    }

    #[inline]
    pub(crate) fn castling_right(&self, color: Color, kingside: bool) -> u64 {
        self.castling_keys[color.index()][usize::from(!kingside)]
    }

    /// XOR of the keys of every right set in `rights`
    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        let mut key = 0;
        for color in Color::BOTH {
            for kingside in [true, false] {
                if rights.has(color, kingside) {
                    key ^= self.castling_right(color, kingside);
                }
            }
        }
        key
    }

    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant_keys[sq.file()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_distinct_per_color_and_square() {
        let a = ZOBRIST.piece(Color::White, Piece::Knight, Square(0, 1));
        let b = ZOBRIST.piece(Color::Black, Piece::Knight, Square(0, 1));
        let c = ZOBRIST.piece(Color::White, Piece::Knight, Square(0, 2));
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(ZOBRIST.side(), 0);
    }

    #[test]
    fn castling_key_combines_individual_rights() {
        let mut rights = CastlingRights::none();
        assert_eq!(ZOBRIST.castling(rights), 0);
        rights.set(Color::White, true);
        rights.set(Color::Black, false);
        assert_eq!(
            ZOBRIST.castling(rights),
            ZOBRIST.castling_right(Color::White, true)
                ^ ZOBRIST.castling_right(Color::Black, false)
        );
    }
}
