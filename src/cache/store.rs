//! Cache Store Module
//!
//! Key-value store for generated results with per-entry TTL and lazy expiry.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheKey, CacheStats};

// == Response Cache ==
/// In-memory result cache with TTL support.
///
/// Expired entries are treated as absent and are removed when a lookup
/// encounters them or when [`ResponseCache::cleanup_expired`] runs.
#[derive(Debug)]
pub struct ResponseCache<V> {
    /// Key-value storage
    entries: HashMap<CacheKey, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL applied by [`ResponseCache::set`]
    default_ttl: Duration,
}

impl<V: Clone> ResponseCache<V> {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `default_ttl` unless
    /// stored with an explicit TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    // == Get ==
    /// Returns the cached value if present and not expired.
    ///
    /// An expired entry is removed and reported as a miss.
    pub fn get(&mut self, key: &CacheKey) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_lookup(true);
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
        }
        self.stats.record_lookup(false);
        None
    }

    // == Set ==
    /// Stores a value under the default TTL, overwriting any existing entry.
    pub fn set(&mut self, key: CacheKey, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Stores a value with an explicit TTL, overwriting any existing entry.
    pub fn set_with_ttl(&mut self, key: CacheKey, value: V, ttl: Duration) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
    }

    // == Clear ==
    /// Drops every entry. Returns how many were stored.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
