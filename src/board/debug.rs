use std::fmt;

use super::{Board, Color, Piece, Square};

impl Board {
    /// Check every internal invariant, panicking with a description of the first violation.
    ///
    /// Grid and piece maps agree square by square, the major/minor counter
    /// matches the pieces on the board, the incremental key matches one
    /// computed from scratch and the current position has been counted.
    pub fn assert_consistent(&self) {
        let mut major_minor = 0;
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                let on_grid = self.piece_at(sq);
                for color in Color::BOTH {
                    let in_map = self.piece_maps[color.index()].get(&sq).copied();
                    let expected = on_grid.filter(|(c, _)| *c == color).map(|(_, p)| p);
                    assert_eq!(
                        in_map, expected,
                        "{color} piece map disagrees with grid at {sq}"
                    );
                }
                if on_grid.is_some_and(|(_, p)| p.is_major_or_minor()) {
                    major_minor += 1;
                }
            }
        }
        assert_eq!(
            self.major_minor_count, major_minor,
            "major/minor counter out of sync"
        );
        assert_eq!(self.hash, self.compute_hash(), "incremental hash drifted");
        assert!(
            self.repetition_counts.get(self.hash) >= 1,
            "current position missing from repetition table"
        );
        assert!(
            self.repetition_counts.distinct_positions() <= self.history.len() + 1,
            "repetition table holds positions outside the history"
        );
    }

    /// The board as an 8x8 ASCII grid, rank 8 first, with file and rank labels.
    #[must_use]
    pub fn ascii(&self) -> String {
        let mut out = String::new();
        out.push_str("  +-----------------+\n");
        for rank in (0..8).rev() {
            out.push_str(&format!("{} |", rank + 1));
            for file in 0..8 {
                let c = self
                    .piece_at(Square(rank, file))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                out.push(' ');
                out.push(c);
            }
            out.push_str(" |\n");
        }
        out.push_str("  +-----------------+\n");
        out.push_str("    a b c d e f g h\n");
        out
    }

    /// Material of one side in centipawns, kings excluded
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.pieces(color)
            .filter(|(_, piece)| *piece != Piece::King)
            .map(|(_, piece)| piece.value())
            .sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ascii())?;
        write!(f, "{}", self.to_fen())
    }
}
