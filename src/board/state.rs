use std::collections::BTreeMap;

use super::history::{HistoryEntry, RepetitionTable, Snapshot};
use super::{CastlingRights, Color, Move, Piece, Square};

/// Major/minor piece count at or below which the position counts as an endgame.
pub(crate) const ENDGAME_MAJOR_MINOR_LIMIT: u32 = 4;

/// A chess position with full legality state and its own move history.
///
/// The 8x8 grid is the source of truth for what stands where. The per-colour
/// maps mirror it for cheap iteration over one side's pieces; both are kept in
/// step by every placement and removal, together with the major/minor piece
/// counter and the reduced position key.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) piece_maps: [BTreeMap<Square, Piece>; 2],
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64, // Zobrist key, clocks excluded
    pub(crate) major_minor_count: u32,
    pub(crate) repetition_counts: RepetitionTable,
    pub(crate) history: Vec<HistoryEntry>,
}

impl Board {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.put_piece(Square(0, file), Color::White, *piece);
            board.put_piece(Square(7, file), Color::Black, *piece);
            board.put_piece(Square(1, file), Color::White, Piece::Pawn);
            board.put_piece(Square(6, file), Color::Black, Piece::Pawn);
        }

        board.set_castling_rights(CastlingRights::all());
        board.reset_history();
        board
    }

    /// A board with no pieces, White to move, no rights.
    ///
    /// Not a legal position on its own; fill it with [`Board::place`] or use
    /// [`super::BoardBuilder`].
    #[must_use]
    pub fn empty() -> Self {
        let mut board = Board {
            grid: [[None; 8]; 8],
            piece_maps: [BTreeMap::new(), BTreeMap::new()],
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            major_minor_count: 0,
            repetition_counts: RepetitionTable::new(),
            history: Vec::new(),
        };
        board.reset_history();
        board
    }

    /// Drop the move history and restart repetition tracking from here.
    pub(crate) fn reset_history(&mut self) {
        self.history.clear();
        self.repetition_counts = RepetitionTable::starting_at(self.hash);
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            en_passant_target: self.en_passant_target,
            castling_rights: self.castling_rights,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            hash: self.hash,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.en_passant_target = snapshot.en_passant_target;
        self.castling_rights = snapshot.castling_rights;
        self.halfmove_clock = snapshot.halfmove_clock;
        self.fullmove_number = snapshot.fullmove_number;
        self.hash = snapshot.hash;
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// Square a pawn may capture onto en passant this ply, if any
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Reduced position key (placement, side, castling, en passant file)
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Number of knights, bishops, rooks and queens on the board (both colours)
    #[inline]
    #[must_use]
    pub fn major_minor_count(&self) -> u32 {
        self.major_minor_count
    }

    /// Endgame heuristic: at most four major/minor pieces remain
    #[inline]
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        self.major_minor_count <= ENDGAME_MAJOR_MINOR_LIMIT
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.grid[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.0][sq.1].is_none()
    }

    /// Pieces of one colour in square order (a1, b1, ..., h8)
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.piece_maps[color.index()]
            .iter()
            .map(|(sq, piece)| (*sq, *piece))
    }

    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.piece_maps[color.index()].len()
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| *piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Moves made since this position was loaded, oldest first
    pub fn move_history(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|entry| entry.mv)
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    /// How many times the current reduced position has occurred
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetition_counts.get(self.hash)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PartialEq for Board {
    /// Positions are equal when every FEN field matches; history is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
            && self.side_to_move == other.side_to_move
            && self.en_passant_target == other.en_passant_target
            && self.castling_rights == other.castling_rights
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Board {}
