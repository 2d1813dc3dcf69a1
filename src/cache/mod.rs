//! Cache Module
//!
//! Provides in-memory caching of generated results with per-entry TTL.

mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::ResponseCache;
