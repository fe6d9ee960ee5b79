//! Asynchronous Job Polling Loop
//!
//! Drives a long-running remote video job to completion by repeated status
//! checks: while the job is not done, suspend for a fixed interval, then
//! refresh the handle. Each status check is individually protected by the
//! retry policy. Once the job reports done, a present result locator means
//! completion; an absent one means the job produced nothing.
//!
//! The loop is generic over the status-check closure so the state machine is
//! testable without a network. By default it runs unbounded, exactly like
//! the polling it models; an optional wall-clock bound turns an overlong job
//! into a distinct timeout failure instead.

use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::debug;

use super::client::wire::VideoOperation;
use super::retry::{RetryPolicy, with_retry};
use crate::config::Config;
use crate::types::{Result, TravelError};

/// Polling parameters, fixed per gateway instance
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Fixed wait between status checks
    pub interval: Duration,
    /// Optional wall-clock bound; `None` polls until the job reports done
    pub timeout: Option<Duration>,
    /// Policy protecting each individual status check
    pub retry: RetryPolicy,
}

impl From<&Config> for PollConfig {
    fn from(config: &Config) -> Self {
        Self {
            interval: Duration::from_millis(config.video.poll_interval_ms),
            timeout: config.video.poll_timeout_secs.map(Duration::from_secs),
            retry: RetryPolicy::from(&config.retry),
        }
    }
}

/// Poll `operation` until the remote job completes, then resolve its outcome.
///
/// Returns the completed handle (result locator guaranteed present) or fails
/// with [`TravelError::JobFailedNoResult`] when the job finished empty, or
/// [`TravelError::JobTimedOut`] when a configured bound elapsed first.
pub async fn await_completion<F, Fut>(
    mut operation: VideoOperation,
    config: &PollConfig,
    check: F,
) -> Result<VideoOperation>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<VideoOperation>>,
{
    let started = Instant::now();

    while !operation.done {
        if let Some(bound) = config.timeout
            && started.elapsed() >= bound
        {
            return Err(TravelError::JobTimedOut(bound));
        }

        sleep(config.interval).await;
        debug!(job = %operation.name, "Checking video job status");

        let name = operation.name.clone();
        operation = with_retry(&config.retry, || check(name.clone())).await?;
    }

    if operation.result_uri().is_none() {
        return Err(TravelError::JobFailedNoResult);
    }

    Ok(operation)
}

// =============================================================================
// Tests
// =============================================================================
