//! Fixed-size position cache keyed by Zobrist hash.
//!
//! Direct-mapped: each key has exactly one slot, and a store overwrites
//! whatever lives there unless it is a deeper result for the same position.
//! The cache belongs to one engine and is cleared before every root search,
//! so it never outlives the search whose results it holds.

use chess_core::{Board, Color, Move, ZOBRIST};

/// How a stored score relates to the true minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score is the minimax value.
    Exact,
    /// The true value is at least the score (search failed high).
    Lower,
    /// The true value is at most the score (search failed low).
    Upper,
}

#[derive(Debug, Clone, Copy)]
pub struct CacheEntry {
    pub key: u64,
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

impl CacheEntry {
    /// Score usable in place of searching with window `(alpha, beta)`.
    pub fn usable_score(&self, alpha: i32, beta: i32) -> Option<i32> {
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= beta => Some(self.score),
            Bound::Upper if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct PositionCache {
    entries: Vec<Option<CacheEntry>>,
    stats: CacheStats,
}

/// Cache key for `board` with `to_move` on move.
#[inline]
pub fn position_key(board: &Board, to_move: Color) -> u64 {
    board.hash() ^ ZOBRIST.side_key(to_move)
}

impl PositionCache {
    /// A cache with `capacity` slots. Zero disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: vec![None; capacity],
            stats: CacheStats::default(),
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.stats = CacheStats::default();
    }

    #[inline]
    fn idx(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    /// Entry for `key` searched to exactly `depth` plies, if present.
    pub fn probe(&mut self, key: u64, depth: u8) -> Option<CacheEntry> {
        if !self.is_enabled() {
            return None;
        }
        self.stats.probes += 1;
        let idx = self.idx(key);
        let hit = self.entries[idx].filter(|e| e.key == key && e.depth == depth);
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, entry: CacheEntry) {
        if !self.is_enabled() {
            return;
        }
        self.stats.stores += 1;
        let idx = self.idx(entry.key);
        let replace = match self.entries[idx] {
            Some(existing) if existing.key == entry.key => entry.depth >= existing.depth,
            _ => true,
        };
        if replace {
            self.entries[idx] = Some(entry);
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
