//! Transposition table for caching search results.
//!
//! A fixed number of slots indexed by the low bits of the reduced position
//! key. Each slot stores the full key, so index collisions are detected on
//! probe rather than returning another position's score.

use crate::board::Move;

/// Default number of slots (a power of two)
pub const DEFAULT_TT_ENTRIES: usize = 1 << 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub hash: u64,
    pub depth: u32,
    pub score: i32,
    pub bound_type: BoundType,
    pub best_move: Option<Move>,
}

impl TTEntry {
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }
}

pub struct TranspositionTable {
    table: Vec<Option<TTEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a table with `entries` slots, rounded down to a power of two.
    #[must_use]
    pub fn new(entries: usize) -> Self {
        let num_entries = if entries.is_power_of_two() {
            entries
        } else {
            (entries.next_power_of_two() / 2).max(1)
        };

        TranspositionTable {
            table: vec![None; num_entries],
            mask: num_entries - 1,
        }
    }

    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Number of occupied slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.iter().all(Option::is_none)
    }

    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<&TTEntry> {
        match &self.table[self.index(hash)] {
            Some(entry) if entry.hash == hash => Some(entry),
            _ => None,
        }
    }

    /// Store a search result.
    ///
    /// A slot is overwritten when it is empty, holds the same position or
    /// holds a result no deeper than the new one. A store
    /// without a best move keeps the one already known for that position.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u32,
        score: i32,
        bound_type: BoundType,
        best_move: Option<Move>,
    ) {
        let index = self.index(hash);
        let (should_replace, known_move) = match &self.table[index] {
            None => (true, None),
            Some(existing) if existing.hash == hash => (true, existing.best_move),
            Some(existing) => (depth >= existing.depth, None),
        };

        if should_replace {
            self.table[index] = Some(TTEntry {
                hash,
                depth,
                score,
                bound_type,
                best_move: best_move.or(known_move),
            });
        }
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.table.iter_mut().for_each(|slot| *slot = None);
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_capacity_rounds_to_power_of_two() {
        assert_eq!(TranspositionTable::new(1000).capacity(), 512);
        assert_eq!(TranspositionTable::new(1024).capacity(), 1024);
        assert_eq!(TranspositionTable::new(0).capacity(), 1);
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(1024);
        let hash = 0x123456789ABCDEF0;
        let mv = Move::quiet(Square(1, 4), Square(3, 4));

        tt.store(hash, 10, 500, BoundType::Exact, Some(mv));

        let entry = tt.probe(hash).expect("should find entry");
        assert_eq!(entry.depth(), 10);
        assert_eq!(entry.score(), 500);
        assert_eq!(entry.bound_type(), BoundType::Exact);
        assert_eq!(entry.best_move(), Some(mv));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_no_false_positives() {
        let mut tt = TranspositionTable::new(16);
        let hash1 = 0x10;
        let hash2 = 0x20; // same slot, different key

        tt.store(hash1, 10, 500, BoundType::Exact, None);

        assert!(tt.probe(hash2).is_none());
    }

    #[test]
    fn test_depth_preferred() {
        let mut tt = TranspositionTable::new(16);
        tt.store(0x10, 5, 1, BoundType::Exact, None);
        tt.store(0x20, 3, 2, BoundType::Exact, None);
        assert!(tt.probe(0x10).is_some(), "shallower entry must not evict deeper one");

        tt.store(0x20, 5, 2, BoundType::Exact, None);
        assert!(tt.probe(0x20).is_some(), "equal depth replaces");
        assert!(tt.probe(0x10).is_none());
    }

    #[test]
    fn test_same_position_keeps_best_move() {
        let mut tt = TranspositionTable::new(16);
        let mv = Move::quiet(Square(0, 6), Square(2, 5));
        tt.store(0x10, 2, 30, BoundType::LowerBound, Some(mv));
        tt.store(0x10, 1, 10, BoundType::UpperBound, None);
        let entry = tt.probe(0x10).expect("entry");
        assert_eq!(entry.depth(), 1);
        assert_eq!(entry.best_move(), Some(mv));
    }

    #[test]
    fn test_clear() {
        let mut tt = TranspositionTable::new(16);
        tt.store(0x10, 2, 30, BoundType::Exact, None);
        tt.clear();
        assert!(tt.is_empty());
    }
}
