//! Move ordering utilities for search.

use super::constants::{CAPTURE_WEIGHT, CASTLING_BONUS, PROMOTION_WEIGHT, TT_MOVE_SCORE};
use crate::board::{Board, Move, MoveList, Piece, ScoredMoveList};

/// Ordering score without the hash move bonus.
///
/// Captures by victim value with the cheaper attacker first (MVV-LVA),
/// then promotions by promoted piece, then castling, then quiet moves.
pub(crate) fn move_score(board: &Board, mv: Move) -> i32 {
    let mut score = 0;
    if let Some(victim) = mv.captured() {
        let attacker = board.piece_on(mv.from()).unwrap_or(Piece::Pawn);
        score += victim.value() * CAPTURE_WEIGHT - attacker.index() as i32;
    }
    if let Some(promo) = mv.promotion_piece() {
        score += promo.value() * PROMOTION_WEIGHT;
    }
    if mv.is_castling() {
        score += CASTLING_BONUS;
    }
    score
}

/// Score and sort `moves`, hash move first. Ties keep generation order.
pub(crate) fn order_moves(board: &Board, moves: &MoveList, tt_move: Option<Move>) -> ScoredMoveList {
    let mut scored = ScoredMoveList::with_capacity(moves.len());
    for &mv in moves {
        let score = if Some(mv) == tt_move {
            TT_MOVE_SCORE
        } else {
            move_score(board, mv)
        };
        scored.push(mv, score);
    }
    scored.sort_by_score_desc();
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_before_quiet_moves() {
        // queen on d1 reaches the rook up the d-file and the pawn along d1-a4
        let mut board = Board::from_fen("3rk3/8/8/8/p7/8/8/3QK3 w - - 0 1");
        let moves = board.generate_moves();
        assert_eq!(moves.iter().filter(|mv| mv.is_capture()).count(), 2);

        let ordered = order_moves(&board, &moves, None);
        let first: Vec<Move> = ordered.iter().take(3).map(|s| s.mv).collect();
        assert_eq!(first[0].to_string(), "d1d8");
        assert_eq!(first[0].captured(), Some(Piece::Rook));
        assert_eq!(first[1].to_string(), "d1a4");
        assert_eq!(first[1].captured(), Some(Piece::Pawn));
        assert!(!first[2].is_capture());
    }

    #[test]
    fn test_tt_move_first() {
        let mut board = Board::new();
        let moves = board.generate_moves();
        let tt_move = moves[7];
        let ordered = order_moves(&board, &moves, Some(tt_move));
        assert_eq!(ordered.iter().next().map(|s| s.mv), Some(tt_move));
    }

    #[test]
    fn test_cheaper_attacker_first() {
        // pawn and queen can both take the knight on d5
        let board = Board::from_fen("4k3/8/8/3n4/4P3/8/8/3QK3 w - - 0 1");
        let by_pawn = Move::capture(crate::board::Square(3, 4), crate::board::Square(4, 3), Piece::Knight);
        let by_queen = Move::capture(crate::board::Square(0, 3), crate::board::Square(4, 3), Piece::Knight);
        assert!(move_score(&board, by_pawn) > move_score(&board, by_queen));
    }
}
