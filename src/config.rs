//! Configuration Module
//!
//! Loads orchestration and server settings from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

/// Default model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default API root used when `GEMINI_BASE_URL` is not set.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Orchestrator and server configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Requests admitted per rate-limit window
    pub rate_limit_max_requests: usize,
    /// Length of the sliding rate-limit window in seconds
    pub rate_limit_window_secs: u64,
    /// TTL in seconds for cached results
    pub cache_ttl_secs: u64,
    /// Attempts made against the completion endpoint before giving up
    pub retry_max_attempts: u32,
    /// Linear backoff step in milliseconds
    pub retry_base_delay_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background purge interval in seconds
    pub cleanup_interval: u64,
    /// API key for the Gemini endpoint
    pub gemini_api_key: Option<String>,
    /// Model name passed to the Gemini endpoint
    pub gemini_model: String,
    /// Gemini API root
    pub gemini_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `RATE_LIMIT_MAX_REQUESTS` - Requests per window (default: 15)
    /// - `RATE_LIMIT_WINDOW_SECS` - Window length in seconds (default: 60)
    /// - `CACHE_TTL_SECS` - Cached result lifetime (default: 1800)
    /// - `RETRY_MAX_ATTEMPTS` - Attempts per remote call (default: 3)
    /// - `RETRY_BASE_DELAY_MS` - Backoff step in milliseconds (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Purge frequency in seconds (default: 60)
    /// - `GEMINI_API_KEY` - Completion endpoint key (no default)
    /// - `GEMINI_MODEL` - Model name (default: gemini-1.5-flash)
    /// - `GEMINI_BASE_URL` - API root (default: the public v1beta endpoint)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rate_limit_max_requests: nonzero_or(
                "RATE_LIMIT_MAX_REQUESTS",
                env_or("RATE_LIMIT_MAX_REQUESTS", defaults.rate_limit_max_requests),
                defaults.rate_limit_max_requests,
            ),
            rate_limit_window_secs: env_or("RATE_LIMIT_WINDOW_SECS", defaults.rate_limit_window_secs),
            cache_ttl_secs: env_or("CACHE_TTL_SECS", defaults.cache_ttl_secs),
            retry_max_attempts: env_or("RETRY_MAX_ATTEMPTS", defaults.retry_max_attempts),
            retry_base_delay_ms: env_or("RETRY_BASE_DELAY_MS", defaults.retry_base_delay_ms),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|v| !v.is_empty()),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
        }
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate_limit_max_requests: 15,
            rate_limit_window_secs: 60,
            cache_ttl_secs: 1800,
            retry_max_attempts: 3,
            retry_base_delay_ms: 1000,
            server_port: 3000,
            cleanup_interval: 60,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

/// Reads and parses an environment variable, falling back to `default` when
/// the variable is missing or unparseable.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Replaces a zero `value` with `default`. A zero quota would reject every
/// request forever.
fn nonzero_or(name: &str, value: usize, default: usize) -> usize {
    if value == 0 {
        warn!("{} must be at least 1, using default {}", name, default);
        default
    } else {
        value
    }
}
