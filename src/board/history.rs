use std::collections::HashMap;

use super::{CastlingRights, Color, Move, Piece, Square};

/// Multiset of reduced position keys seen along the current line.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    /// Table holding a single occurrence of `hash`
    pub(crate) fn starting_at(hash: u64) -> Self {
        let mut table = RepetitionTable::new();
        table.increment(hash);
        table
    }

    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_add(1);
        self.counts.insert(hash, next);
        next
    }

    pub(crate) fn decrement(&mut self, hash: u64) {
        match self.get(hash) {
            0 => debug_assert!(false, "repetition count underflow for {hash:#018x}"),
            1 => {
                self.counts.remove(&hash);
            }
            n => {
                self.counts.insert(hash, n - 1);
            }
        }
    }

    pub(crate) fn distinct_positions(&self) -> usize {
        self.counts.len()
    }
}

/// Everything a move overwrites that cannot be recomputed from the move itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) snapshot: Snapshot,
    /// Captured piece with the square it stood on (differs from `mv.to()` for en passant)
    pub(crate) captured: Option<(Square, Color, Piece)>,
}
