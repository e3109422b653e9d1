//! Pawn structure evaluation.
//!
//! Evaluates isolated, doubled and passed pawns.

use crate::board::state::Board;
use crate::board::types::{Color, Piece, Square};

use super::tables::{DOUBLED_PAWN_PENALTY, ISOLATED_PAWN_PENALTY, PASSED_PAWN_BONUS};

fn pawns_of(board: &Board, color: Color) -> Vec<Square> {
    board
        .pieces(color)
        .filter(|(_, piece)| *piece == Piece::Pawn)
        .map(|(sq, _)| sq)
        .collect()
}

/// No enemy pawn on the same or an adjacent file stands in front of `pawn`
fn is_passed(pawn: Square, color: Color, enemy_pawns: &[Square]) -> bool {
    !enemy_pawns.iter().any(|enemy| {
        enemy.file().abs_diff(pawn.file()) <= 1
            && match color {
                Color::White => enemy.rank() > pawn.rank(),
                Color::Black => enemy.rank() < pawn.rank(),
            }
    })
}

fn side_score(color: Color, own: &[Square], enemy: &[Square]) -> i32 {
    let mut per_file = [0i32; 8];
    for pawn in own {
        per_file[pawn.file()] += 1;
    }

    let mut score = 0;
    for count in per_file {
        if count > 1 {
            score -= DOUBLED_PAWN_PENALTY * (count - 1);
        }
    }

    for &pawn in own {
        let file = pawn.file();
        let left = file.checked_sub(1).map_or(0, |f| per_file[f]);
        let right = per_file.get(file + 1).copied().unwrap_or(0);
        if left == 0 && right == 0 {
            score -= ISOLATED_PAWN_PENALTY;
        }

        if is_passed(pawn, color, enemy) {
            let relative_rank = match color {
                Color::White => pawn.rank(),
                Color::Black => 7 - pawn.rank(),
            };
            score += PASSED_PAWN_BONUS[relative_rank];
        }
    }
    score
}

impl Board {
    /// Evaluate pawn structure from White's perspective.
    #[must_use]
    pub fn eval_pawn_structure(&self) -> i32 {
        let white = pawns_of(self, Color::White);
        let black = pawns_of(self, Color::Black);
        side_score(Color::White, &white, &black) - side_score(Color::Black, &black, &white)
    }
}
