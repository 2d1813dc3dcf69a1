//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached value together with its creation time and lifetime.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation instant
    pub created_at: Instant,
    /// Lifetime measured from `created_at`
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current instant.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is valid while `now - created_at < ttl`, so it expires at the
    /// exact instant the TTL has fully elapsed.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Expiry check against an explicit instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.created_at.elapsed())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_valid_before_ttl() {
        let entry = CacheEntry::new("plan", Duration::from_millis(100));

        tokio::time::advance(Duration::from_millis(50)).await;
        assert!(!entry.is_expired());
        assert_eq!(entry.ttl_remaining(), Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expired_after_ttl() {
        let entry = CacheEntry::new("plan", Duration::from_millis(100));

        tokio::time::advance(Duration::from_millis(150)).await;
        assert!(entry.is_expired());
        assert_eq!(entry.ttl_remaining(), Duration::ZERO);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("plan", Duration::from_millis(100));
        let boundary = entry.created_at + Duration::from_millis(100);

        assert!(!entry.is_expired_at(boundary - Duration::from_millis(1)));
        assert!(entry.is_expired_at(boundary), "Entry should be expired at boundary");
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let entry = CacheEntry::new(1u8, Duration::ZERO);
        assert!(entry.is_expired_at(entry.created_at));
    }
}
