mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Quiet move or capture onto `to`, or `None` if a friendly piece stands there
    #[inline]
    pub(crate) fn step_move(&self, from: Square, to: Square, color: Color) -> Option<Move> {
        match self.piece_at(to) {
            None => Some(Move::quiet(from, to)),
            Some((occupant, piece)) if occupant != color => Some(Move::capture(from, to, piece)),
            Some(_) => None,
        }
    }

    pub(crate) fn generate_piece_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::King => self.generate_king_moves(from, color, moves),
            _ => {
                if let Some(slider) = SliderType::of(piece) {
                    self.generate_slider_moves(from, color, slider, moves);
                }
            }
        }
    }

    /// Every move `color`'s pieces could make ignoring own-king safety.
    ///
    /// Castling is still only offered through unattacked squares. En passant
    /// is only generated for the side to move.
    #[must_use]
    pub fn pseudo_legal_moves_for(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces(color) {
            self.generate_piece_moves(from, color, piece, &mut moves);
        }
        moves
    }

    /// Pseudo-legal moves of the side to move
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        self.pseudo_legal_moves_for(self.side_to_move)
    }

    /// Legal moves of the side to move, in generation order.
    ///
    /// Each pseudo-legal move is made, kept if it leaves the mover's king
    /// unattacked, and unmade again; the board is unchanged afterwards.
    pub fn generate_moves(&mut self) -> MoveList {
        let mut moves = self.pseudo_legal_moves();
        self.retain_legal(&mut moves);
        moves
    }

    /// Legal captures of the side to move (en passant included)
    pub fn generate_captures(&mut self) -> MoveList {
        let mut moves: MoveList = self
            .pseudo_legal_moves()
            .into_iter()
            .filter(|mv| mv.is_capture())
            .collect();
        self.retain_legal(&mut moves);
        moves
    }

    fn retain_legal(&mut self, moves: &mut MoveList) {
        let color = self.side_to_move;
        moves.retain(|&mv| {
            self.make_move(mv);
            let legal = !self.is_in_check(color);
            self.unmake_move();
            legal
        });
    }

    /// True if the side to move has at least one legal move
    pub fn has_legal_moves(&mut self) -> bool {
        let color = self.side_to_move;
        self.pseudo_legal_moves().into_iter().any(|mv| {
            self.make_move(mv);
            let legal = !self.is_in_check(color);
            self.unmake_move();
            legal
        })
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move();
        }
        nodes
    }

    /// Perft split by root move, for locating generator bugs.
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.generate_moves();
        moves
            .into_iter()
            .map(|mv| {
                self.make_move(mv);
                let nodes = self.perft(depth.saturating_sub(1));
                self.unmake_move();
                (mv, nodes)
            })
            .collect()
    }
}
