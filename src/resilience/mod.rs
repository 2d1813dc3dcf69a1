//! Resilience Module
//!
//! Admission control and retry for calls to the completion endpoint.
//!
//! # Components
//! - Rate limiter: sliding-window request counter with wait-time reporting
//! - Retry: bounded attempts with linear backoff

mod rate_limiter;
mod retry;

pub use rate_limiter::{RateLimitStatus, RateLimiter};
pub use retry::{execute, RetryPolicy};
