//! Response DTOs for the HTTP API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! domain results.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::resilience::RateLimitStatus;

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    pub message: String,
    pub cleared: usize,
}

impl ClearCacheResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} cached results", cleared),
            cleared,
        }
    }
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Stored results, including expired ones not yet purged
    pub cache_size: usize,
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    /// hits / (hits + misses)
    pub hit_rate: f64,
    pub rate_limit: RateLimitStatus,
}

impl StatsResponse {
    pub fn new(stats: CacheStats, rate_limit: RateLimitStatus) -> Self {
        Self {
            cache_size: stats.total_entries,
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            hit_rate: stats.hit_rate(),
            rate_limit,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
    /// Seconds to wait before retrying, on rate-limit rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_secs: Option<u64>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            retry_after_secs: None,
        }
    }

    pub fn with_retry_after(mut self, secs: u64) -> Self {
        self.retry_after_secs = Some(secs);
        self
    }
}
