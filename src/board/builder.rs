//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let square = |name: &str| name.parse::<Square>().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(square("e1"), Color::White, Piece::King)
//!     .piece(square("e8"), Color::Black, Piece::King)
//!     .piece(square("a2"), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use std::collections::BTreeMap;

use super::{Board, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
///
/// The builder does not validate the position: kings may be missing and
/// rights may not match the placement. Castling is only ever generated when
/// king and rook actually stand on their home squares.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: BTreeMap<Square, (Color, Piece)>,
    side_to_move: Option<Color>,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: Option<u32>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new().castling(board.castling_rights());
        for color in Color::BOTH {
            for (sq, piece) in board.pieces(color) {
                builder.pieces.insert(sq, (color, piece));
            }
        }
        builder
    }

    /// Place a piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.insert(square, (color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.remove(&square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = Some(color);
        self
    }

    /// Replace all castling rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, square: Square) -> Self {
        self.en_passant_target = Some(square);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number (clamped to at least 1).
    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = Some(number.max(1));
        self
    }

    /// Build the position with a fresh history.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, (color, piece)) in self.pieces {
            board.put_piece(sq, color, piece);
        }
        board.set_side_to_move(self.side_to_move.unwrap_or(Color::White));
        board.set_castling_rights(self.castling_rights);
        board.set_en_passant_target(self.en_passant_target);
        board.halfmove_clock = self.halfmove_clock;
        board.fullmove_number = self.fullmove_number.unwrap_or(1);
        board.reset_history();
        board
    }
}
