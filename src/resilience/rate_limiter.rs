//! Sliding Window Rate Limiter
//!
//! Counts admitted requests within a trailing time window.

use std::collections::VecDeque;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

// == Rate Limiter ==
/// Sliding-window admission control.
///
/// Timestamps of admitted requests are kept oldest first. After pruning,
/// the number of recorded timestamps never exceeds `max_requests`.
#[derive(Debug)]
pub struct RateLimiter {
    /// Requests admitted per window
    max_requests: usize,
    /// Trailing window length
    window: Duration,
    /// Admission instants, oldest at the front
    requests: VecDeque<Instant>,
}

/// Snapshot of the limiter for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLimitStatus {
    /// Requests admitted per window
    pub limit: usize,
    /// Requests still admissible right now
    pub remaining: usize,
    /// Window length in milliseconds
    pub window_ms: u64,
    /// Time until the oldest recorded request leaves the window
    pub wait_time_ms: u64,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            requests: VecDeque::with_capacity(max_requests),
        }
    }

    // == Admission ==
    /// Prunes stale timestamps and admits the request if under quota.
    ///
    /// Admission records the current instant, so a `true` result has already
    /// consumed a slot. Pruning, the check and the record happen in this one
    /// synchronous call.
    pub fn can_make_request(&mut self) -> bool {
        let now = Instant::now();
        self.prune_at(now);

        if self.requests.len() < self.max_requests {
            self.requests.push_back(now);
            true
        } else {
            false
        }
    }

    // == Wait Time ==
    /// Time until the oldest recorded request exits the window.
    ///
    /// Zero when nothing is recorded or the oldest entry is already stale.
    pub fn wait_time(&self) -> Duration {
        match self.requests.front() {
            Some(oldest) => (*oldest + self.window).saturating_duration_since(Instant::now()),
            None => Duration::ZERO,
        }
    }

    /// Drops timestamps that have left the window.
    pub fn prune(&mut self) -> usize {
        self.prune_at(Instant::now())
    }

    fn prune_at(&mut self, now: Instant) -> usize {
        let before = self.requests.len();
        while let Some(oldest) = self.requests.front() {
            if now.saturating_duration_since(*oldest) >= self.window {
                self.requests.pop_front();
            } else {
                break;
            }
        }
        before - self.requests.len()
    }

    // == Status ==
    /// Reports quota usage without recording anything.
    pub fn status(&self) -> RateLimitStatus {
        let now = Instant::now();
        let in_window = self
            .requests
            .iter()
            .filter(|at| now.saturating_duration_since(**at) < self.window)
            .count();

        RateLimitStatus {
            limit: self.max_requests,
            remaining: self.max_requests.saturating_sub(in_window),
            window_ms: self.window.as_millis() as u64,
            wait_time_ms: self.wait_time().as_millis() as u64,
        }
    }

    /// Number of recorded timestamps, including any not yet pruned.
    pub fn recorded(&self) -> usize {
        self.requests.len()
    }
}
