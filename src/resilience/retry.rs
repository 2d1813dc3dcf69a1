//! Retry Controller
//!
//! Bounded, strictly sequential retry with linear backoff.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

// == Retry Policy ==
/// Attempt budget and backoff step for one logical remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, never less than one
    pub max_attempts: u32,
    /// Delay unit; attempt `n` is followed by `base_delay * n`
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Delay after the given (1-based) failed attempt.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }

    /// Runs `operation` under this policy. See [`execute`].
    pub async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        execute(operation, self.max_attempts, self.base_delay).await
    }
}

// == Execute ==
/// Calls `operation` until it succeeds or `max_attempts` calls have failed.
///
/// Attempt `n + 1` starts only after attempt `n` has failed and
/// `base_delay * n` has elapsed. The last error is returned unchanged.
pub async fn execute<F, Fut, T, E>(
    mut operation: F,
    max_attempts: u32,
    base_delay: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                let delay = base_delay.saturating_mul(attempt);
                warn!(
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Remote call failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                warn!(attempts = attempt, error = %err, "Remote call failed, attempts exhausted");
                return Err(err);
            }
        }
    }
}
