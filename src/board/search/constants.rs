//! Search constants.

// ============================================================================
// SCORES
// ============================================================================

/// Larger than any reachable score; the initial alpha-beta window
pub const INFINITY: i32 = 1_000_000;

/// Score for delivering mate at the root; mates found deeper score lower
pub const MATE_SCORE: i32 = 100_000;

/// Deepest ply the search can reach (iterative depth plus quiescence)
pub const MAX_PLY: i32 = 128;

/// Scores with absolute value >= this are mate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Maximum quiescence search depth, in plies beyond the horizon
pub const MAX_QSEARCH_DEPTH: u32 = 4;

/// Depth used when no limit is given
pub const DEFAULT_MAX_DEPTH: u32 = 4;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================

/// Hash move (from transposition table), tried first
pub const TT_MOVE_SCORE: i32 = 1 << 24;

/// Multiplier on the captured piece value
pub const CAPTURE_WEIGHT: i32 = 10;

/// Multiplier on the promotion piece value
pub const PROMOTION_WEIGHT: i32 = 20;

/// Small nudge so castling is tried before other quiet moves
pub const CASTLING_BONUS: i32 = 5;
