//! Evaluation terms.
//!
//! Contains evaluation functions for:
//! - Pawn structure (isolated, doubled, passed pawns)
//! - Mobility (pseudo-legal move counts)
//!
//! Material and piece-square terms live in `eval.rs`; all constants in `tables`.

mod mobility;
mod pawn_structure;
pub(crate) mod tables;
