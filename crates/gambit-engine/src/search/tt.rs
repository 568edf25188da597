//! A plain transposition table: one `HashMap` per search, discarded
//! when the search returns.

use std::collections::HashMap;

use gambit_core::{Fingerprint, Move};

/// What a stored score means relative to the window it was searched
/// with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score is exact — a principal-variation node.
    Exact,
    /// The true score is at least this (search failed high).
    LowerBound,
    /// The true score is at most this (search failed low).
    UpperBound,
}

#[derive(Debug, Clone, Copy)]
pub struct TtEntry {
    pub depth: u32,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Move,
}

/// The whole table is just a map; it lives for the lifetime of one
/// top-level search and is never persisted across calls to
/// [`crate::search::Searcher::suggest_move`].
pub type TranspositionTable = HashMap<Fingerprint, TtEntry>;

/// Insert `entry` for `key`, replacing the existing entry only if the
/// new one was searched to at least as great a depth.
pub fn store(tt: &mut TranspositionTable, key: Fingerprint, entry: TtEntry) {
    match tt.get(&key) {
        Some(existing) if existing.depth > entry.depth => {}
        _ => {
            tt.insert(key, entry);
        }
    }
}
