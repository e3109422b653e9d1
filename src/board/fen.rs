use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, Square, UciMove};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row;
        let mut file = 0;
        for c in rank_str.chars() {
            match c {
                '1'..='8' => file += c as usize - '0' as usize,
                _ => {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::BadRankWidth {
                            rank: rank + 1,
                            files: file + 1,
                        });
                    }
                    board.put_piece(Square(rank, file), color, piece);
                    file += 1;
                }
            }
        }
        if file != 8 {
            return Err(FenError::BadRankWidth {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        match c {
            'K' => rights.set(Color::White, true),
            'Q' => rights.set(Color::White, false),
            'k' => rights.set(Color::Black, true),
            'q' => rights.set(Color::Black, false),
            _ => return Err(FenError::InvalidCastling { char: c }),
        }
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    match field.parse::<Square>() {
        // only the square a double push skipped over can be a target
        Ok(sq) if sq.rank() == 2 || sq.rank() == 5 => Ok(Some(sq)),
        _ => Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        }),
    }
}

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The halfmove clock and fullmove number may be omitted and default to
    /// 0 and 1. The loaded position starts a fresh history.
    ///
    /// # Errors
    ///
    /// Returns a [`FenError`] naming the first malformed field.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut board = Board::empty();
        parse_placement(&mut board, parts[0])?;

        for color in Color::BOTH {
            let kings = board
                .pieces(color)
                .filter(|(_, piece)| *piece == Piece::King)
                .count();
            if kings != 1 {
                return Err(FenError::KingCount {
                    color: if color == Color::White { "White" } else { "Black" },
                    found: kings,
                });
            }
        }

        match parts[1] {
            "w" => board.set_side_to_move(Color::White),
            "b" => board.set_side_to_move(Color::Black),
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        board.set_castling_rights(parse_castling(parts[2])?);
        board.set_en_passant_target(parse_en_passant(parts[3])?);

        if let Some(field) = parts.get(4) {
            board.halfmove_clock = field.parse().map_err(|_| FenError::InvalidHalfmove {
                found: (*field).to_string(),
            })?;
        }
        if let Some(field) = parts.get(5) {
            board.fullmove_number = match field.parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(FenError::InvalidFullmove {
                        found: (*field).to_string(),
                    })
                }
            };
        }

        board.reset_history();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation (all six fields).
    #[must_use]
    pub fn to_fen(&self) -> String {
        let rows: Vec<String> = (0..8)
            .rev()
            .map(|rank| {
                let mut row = String::new();
                let mut empty = 0;
                for file in 0..8 {
                    match self.piece_at(Square(rank, file)) {
                        Some((color, piece)) => {
                            if empty > 0 {
                                row.push_str(&empty.to_string());
                                empty = 0;
                            }
                            row.push(piece.to_fen_char(color));
                        }
                        None => empty += 1,
                    }
                }
                if empty > 0 {
                    row.push_str(&empty.to_string());
                }
                row
            })
            .collect();

        let active = if self.white_to_move() { "w" } else { "b" };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Resolve a move in long algebraic notation (e.g., "e2e4", "e7e8q")
    /// against the legal moves of this position.
    ///
    /// # Errors
    ///
    /// Malformed text fails with `InvalidLength`, `InvalidSquare` or
    /// `InvalidPromotion`; a well-formed move that is not legal here fails
    /// with `IllegalMove`.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let wanted: UciMove = uci.parse()?;
        self.generate_moves()
            .into_iter()
            .find(|mv| mv.coordinates() == wanted)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }

    /// Parse a long algebraic move and play it in one call.
    ///
    /// # Errors
    ///
    /// Same as [`Board::parse_move`]; the board is unchanged on error.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_fen_matches_new() {
        assert_eq!(Board::from_fen(START_FEN), Board::new());
        assert_eq!(Board::new().to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_round_trip_all_fields() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 37 61",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        ] {
            assert_eq!(Board::from_fen(fen).to_fen(), fen);
        }
    }

    #[test]
    fn test_fen_counters_default() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").unwrap();
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
    }

    #[test]
    fn test_fen_hash_matches_recomputed() {
        let board = Board::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w Kq d6 3 20");
        assert_eq!(board.hash(), board.compute_hash());
        assert_eq!(board.repetition_count(), 1);
    }

    #[test]
    fn test_fen_error_field_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::WrongFieldCount { found: 2 })));
        let result = Board::try_from_fen(&format!("{START_FEN} extra"));
        assert!(matches!(result, Err(FenError::WrongFieldCount { found: 7 })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidPiece { char: 'x' }));
    }

    #[test]
    fn test_fen_error_rank_shape() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::WrongRankCount { found: 7 })));
        let result =
            Board::try_from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::BadRankWidth { rank: 7, files: 7 })));
        let result =
            Board::try_from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::BadRankWidth { rank: 7, .. })));
    }

    #[test]
    fn test_fen_error_king_count() {
        let result = Board::try_from_fen("8/8/8/8/8/8/8/K7 w - - 0 1");
        assert_eq!(
            result,
            Err(FenError::KingCount {
                color: "Black",
                found: 0
            })
        );
    }

    #[test]
    fn test_fen_error_side_castling_ep() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidCastling { char: 'X' }));
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_counters() {
        let result = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - x 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmove { .. })));
        let result = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 0 0");
        assert!(matches!(result, Err(FenError::InvalidFullmove { .. })));
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_parse_move_e2e4() {
        let mut board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert_eq!(mv, Move::quiet(Square(1, 4), Square(3, 4)));
    }

    #[test]
    fn test_parse_move_fills_in_flags() {
        let mut board = Board::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 0 2");
        assert!(board.parse_move("e5d6").unwrap().is_en_passant());
        assert!(board.parse_move("e1g1").unwrap().is_castling());
        assert_eq!(
            board.parse_move("a1a8").unwrap().captured(),
            Some(Piece::Rook)
        );
    }

    #[test]
    fn test_parse_move_promotion() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = board.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion_piece(), Some(Piece::Queen));
        // the piece letter is required
        assert!(matches!(
            board.parse_move("a7a8"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_parse_move_errors() {
        let mut board = Board::new();
        assert_eq!(
            board.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        );
        assert!(matches!(
            board.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            board.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        assert_eq!(
            board.parse_move("e7e8k"),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
    }

    #[test]
    fn test_make_move_uci() {
        let mut board = Board::new();
        board.make_move_uci("e2e4").unwrap();
        assert!(!board.white_to_move());
        assert!(board.make_move_uci("e2e4").is_err());
        assert_eq!(board.to_fen().split(' ').next(), Some("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"));
    }
}
