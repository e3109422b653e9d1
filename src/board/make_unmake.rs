use crate::zobrist::ZOBRIST;

use super::error::MoveError;
use super::history::HistoryEntry;
use super::{Board, CastlingRights, Color, Move, Piece, Square};

/// Rook origin and destination for a castling move, keyed by the king's destination
#[inline]
pub(crate) fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    if king_to.1 == 6 {
        (Square(king_to.0, 7), Square(king_to.0, 5))
    } else {
        (Square(king_to.0, 0), Square(king_to.0, 3))
    }
}

/// Castling right tied to a rook home corner
fn corner_right(sq: Square) -> Option<(Color, bool)> {
    match (sq.0, sq.1) {
        (0, 0) => Some((Color::White, false)),
        (0, 7) => Some((Color::White, true)),
        (7, 0) => Some((Color::Black, false)),
        (7, 7) => Some((Color::Black, true)),
        _ => None,
    }
}

impl Board {
    /// Put a piece on an empty square, updating grid, piece map, counter and key.
    pub(crate) fn put_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        debug_assert!(
            self.grid[sq.0][sq.1].is_none(),
            "put_piece on occupied square {sq}"
        );
        self.grid[sq.0][sq.1] = Some((color, piece));
        let previous = self.piece_maps[color.index()].insert(sq, piece);
        debug_assert!(previous.is_none(), "piece map already held {sq}");
        if piece.is_major_or_minor() {
            self.major_minor_count += 1;
        }
        self.hash ^= ZOBRIST.piece(color, piece, sq);
    }

    /// Lift whatever stands on `sq`, updating grid, piece map, counter and key.
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let (color, piece) = self.grid[sq.0][sq.1].take()?;
        let removed = self.piece_maps[color.index()].remove(&sq);
        debug_assert_eq!(removed, Some(piece), "piece map out of sync at {sq}");
        if piece.is_major_or_minor() {
            self.major_minor_count -= 1;
        }
        self.hash ^= ZOBRIST.piece(color, piece, sq);
        Some((color, piece))
    }

    pub(crate) fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.hash ^= ZOBRIST.castling(self.castling_rights) ^ ZOBRIST.castling(rights);
        self.castling_rights = rights;
    }

    pub(crate) fn set_en_passant_target(&mut self, target: Option<Square>) {
        if let Some(old) = self.en_passant_target {
            self.hash ^= ZOBRIST.en_passant(old);
        }
        if let Some(new) = target {
            self.hash ^= ZOBRIST.en_passant(new);
        }
        self.en_passant_target = target;
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        if self.side_to_move != color {
            self.hash ^= ZOBRIST.side();
            self.side_to_move = color;
        }
    }

    /// Key recomputed from scratch; must always equal [`Board::hash`].
    pub(crate) fn compute_hash(&self) -> u64 {
        let mut hash = 0;
        for color in Color::BOTH {
            for (sq, piece) in self.pieces(color) {
                hash ^= ZOBRIST.piece(color, piece, sq);
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.side();
        }
        hash ^= ZOBRIST.castling(self.castling_rights);
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(ep);
        }
        hash
    }

    /// Set or clear a square.
    ///
    /// This is a setup operation: the move history is dropped and repetition
    /// tracking restarts from the resulting position. Castling rights and the
    /// en passant target are left as they are.
    pub fn place(&mut self, sq: Square, piece: Option<(Color, Piece)>) {
        self.take_piece(sq);
        if let Some((color, piece)) = piece {
            self.put_piece(sq, color, piece);
        }
        self.reset_history();
    }

    /// Play a move without checking legality.
    ///
    /// The move must come from [`Board::generate_moves`] (or
    /// [`Board::pseudo_legal_moves`]) for this exact position; anything else
    /// corrupts the board. Use [`Board::apply_move`] for untrusted input.
    pub fn make_move(&mut self, mv: Move) {
        let color = self.side_to_move;
        debug_assert!(
            matches!(self.piece_at(mv.from()), Some((c, _)) if c == color),
            "make_move {mv:?}: origin does not hold a {color} piece"
        );

        let snapshot = self.snapshot();

        let captured = if mv.is_en_passant() {
            // the captured pawn sits beside the origin, not on the destination
            let cap_sq = Square(mv.from().rank(), mv.to().file());
            self.take_piece(cap_sq).map(|(c, p)| (cap_sq, c, p))
        } else if mv.is_castling() {
            None
        } else {
            self.take_piece(mv.to()).map(|(c, p)| (mv.to(), c, p))
        };
        debug_assert_eq!(
            captured.map(|(_, _, p)| p),
            mv.captured(),
            "make_move {mv:?}: capture flag disagrees with board"
        );

        let (_, moving) = self
            .take_piece(mv.from())
            .expect("make_move: origin square is empty");
        self.put_piece(mv.to(), color, mv.promotion_piece().unwrap_or(moving));

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(mv.to());
            let (rook_color, rook) = self
                .take_piece(rook_from)
                .expect("make_move: castling without rook");
            self.put_piece(rook_to, rook_color, rook);
        }

        let double_push =
            moving == Piece::Pawn && mv.from().rank().abs_diff(mv.to().rank()) == 2;
        self.set_en_passant_target(double_push.then(|| {
            Square((mv.from().rank() + mv.to().rank()) / 2, mv.from().file())
        }));

        let mut rights = self.castling_rights;
        if moving == Piece::King {
            rights.remove_color(color);
        }
        for sq in [mv.from(), mv.to()] {
            if let Some((c, kingside)) = corner_right(sq) {
                rights.remove(c, kingside);
            }
        }
        self.set_castling_rights(rights);

        if moving == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.set_side_to_move(color.opponent());

        self.history.push(HistoryEntry {
            mv,
            snapshot,
            captured,
        });
        self.repetition_counts.increment(self.hash);
    }

    /// Take back the last move made with [`Board::make_move`].
    ///
    /// # Panics
    ///
    /// Panics if there is no move to take back; see [`Board::undo`] for the
    /// checked variant.
    pub fn unmake_move(&mut self) -> Move {
        let entry = self
            .history
            .pop()
            .expect("unmake_move: no move to take back");
        self.repetition_counts.decrement(self.hash);

        let mv = entry.mv;
        let color = self.side_to_move.opponent();
        self.side_to_move = color;

        let (_, placed) = self
            .take_piece(mv.to())
            .expect("unmake_move: destination square is empty");
        let original = if mv.is_promotion() { Piece::Pawn } else { placed };
        self.put_piece(mv.from(), color, original);

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(mv.to());
            let (rook_color, rook) = self
                .take_piece(rook_to)
                .expect("unmake_move: castled rook missing");
            self.put_piece(rook_from, rook_color, rook);
        }

        if let Some((sq, cap_color, cap_piece)) = entry.captured {
            self.put_piece(sq, cap_color, cap_piece);
        }

        self.restore(entry.snapshot);
        mv
    }

    /// Play `mv` if it is legal in the current position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Illegal`] when `mv` is not among the legal moves;
    /// the board is left untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.generate_moves().contains(&mv) {
            return Err(MoveError::Illegal {
                notation: mv.to_string(),
            });
        }
        self.make_move(mv);
        Ok(())
    }

    /// Take back the last move, if any.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoHistory`] at the start of the recorded history.
    pub fn undo(&mut self) -> Result<Move, MoveError> {
        if self.history.is_empty() {
            return Err(MoveError::NoHistory);
        }
        Ok(self.unmake_move())
    }
}
