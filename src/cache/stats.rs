//! Cache Statistics Module
//!
//! Lookup counters kept by [`ResponseCache`](super::ResponseCache) and the
//! snapshot it hands out for diagnostics.

use serde::Serialize;

/// Counters for one cache, plus its entry count at snapshot time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that found nothing usable, absent or expired
    pub misses: u64,
    /// Expired entries dropped, lazily on lookup or by purge
    pub expirations: u64,
    /// Entries stored when the snapshot was taken
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of these counters carrying the current entry count.
    pub fn snapshot(&self, total_entries: usize) -> Self {
        Self {
            total_entries,
            ..self.clone()
        }
    }

    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Share of lookups that hit, 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    pub fn record_lookup(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }
}
