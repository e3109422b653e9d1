//! Game termination: draw rules, checkmate and stalemate.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Piece};

/// Halfmove clock value at which the fifty-move rule applies
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// Why a game ended drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    FiftyMove,
    Repetition,
    InsufficientMaterial,
    Stalemate,
}

/// Outcome of a position from the rules' point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    /// The given colour delivered checkmate
    Win(Color),
    Draw(DrawReason),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Win(color) => write!(f, "{color} wins"),
            GameStatus::Draw(DrawReason::FiftyMove) => write!(f, "draw by fifty-move rule"),
            GameStatus::Draw(DrawReason::Repetition) => write!(f, "draw by threefold repetition"),
            GameStatus::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "draw by insufficient material")
            }
            GameStatus::Draw(DrawReason::Stalemate) => write!(f, "draw by stalemate"),
        }
    }
}

impl Board {
    /// The rule that makes this position a draw regardless of legal moves, if any
    #[must_use]
    pub fn draw_by_rule(&self) -> Option<DrawReason> {
        if self.halfmove_clock >= FIFTY_MOVE_LIMIT {
            Some(DrawReason::FiftyMove)
        } else if self.repetition_counts.get(self.hash) >= 3 {
            Some(DrawReason::Repetition)
        } else if self.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else {
            None
        }
    }

    /// Fifty-move rule, threefold repetition or insufficient material
    #[must_use]
    pub fn is_draw_by_rule(&self) -> bool {
        self.draw_by_rule().is_some()
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// only bishops that all stand on one square colour.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0;
        let mut bishops_light = 0;
        let mut bishops_dark = 0;

        for color in Color::BOTH {
            for (sq, piece) in self.pieces(color) {
                match piece {
                    Piece::King => {}
                    Piece::Knight => knights += 1,
                    Piece::Bishop if sq.is_light() => bishops_light += 1,
                    Piece::Bishop => bishops_dark += 1,
                    _ => return false,
                }
            }
        }

        let minors = knights + bishops_light + bishops_dark;
        if minors <= 1 {
            return true;
        }
        knights == 0 && (bishops_light == 0 || bishops_dark == 0)
    }

    /// Draw rules first, then checkmate or stalemate, else ongoing.
    pub fn status(&mut self) -> GameStatus {
        if let Some(reason) = self.draw_by_rule() {
            return GameStatus::Draw(reason);
        }
        if !self.generate_moves().is_empty() {
            return GameStatus::Ongoing;
        }
        if self.in_check() {
            GameStatus::Win(self.side_to_move.opponent())
        } else {
            GameStatus::Draw(DrawReason::Stalemate)
        }
    }

    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        matches!(self.status(), GameStatus::Win(_))
    }

    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        self.status() == GameStatus::Draw(DrawReason::Stalemate)
    }
}
