//! Retry-With-Backoff Wrapper
//!
//! Every external call goes through [`with_retry`]. Failures classified as a
//! rate-limit condition are retried with exponentially increasing delay, up
//! to a bounded budget; any other failure propagates unchanged on the first
//! attempt. Once the budget is exhausted under persistent rate limiting the
//! call fails with the distinguished quota-exceeded error.
//!
//! The delay sequence for the default policy is 2000 ms then 4000 ms
//! (2 retries, 3 attempts total). The loop carries `(remaining, delay)`
//! explicitly rather than recursing.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::warn;

use crate::config::RetryConfig;
use crate::constants;
use crate::types::{Result, TravelError};

/// Bounded exponential-backoff policy, fixed at call sites
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the initial attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Delay multiplier per retry
    pub backoff_multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: constants::retry::DEFAULT_MAX_RETRIES,
            initial_delay: Duration::from_millis(constants::retry::INITIAL_DELAY_MS),
            backoff_multiplier: constants::retry::BACKOFF_MULTIPLIER,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_delay: Duration::from_millis(config.initial_delay_ms),
            backoff_multiplier: config.backoff_multiplier,
        }
    }
}

/// Execute `operation`, retrying rate-limit failures with backoff.
///
/// - Success returns immediately; no further attempts.
/// - Rate-limit failure with budget left: suspend for the current delay
///   (non-blocking), then retry with a doubled delay.
/// - Rate-limit failure with budget exhausted: [`TravelError::QuotaExceeded`],
///   discarding the original error detail.
/// - Any other failure: propagated unchanged, immediately.
///
/// The wrapper adds no side effects of its own; whatever partial effects the
/// operation caused before failing stand (at-least-once semantics).
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut remaining = policy.max_retries;
    let mut delay = policy.initial_delay;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_rate_limit() => {
                if remaining == 0 {
                    warn!("Rate limit persisted through retry budget");
                    return Err(TravelError::QuotaExceeded);
                }
                warn!(
                    delay_ms = delay.as_millis() as u64,
                    remaining, "Rate limit hit. Retrying"
                );
                sleep(delay).await;
                remaining -= 1;
                delay *= policy.backoff_multiplier;
            }
            Err(err) => return Err(err),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
