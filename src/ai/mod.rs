//! AI Integration Layer
//!
//! The resilience shim between the gateway operations and the generative
//! API: retry-with-backoff around every external call, the polling loop for
//! long-running video jobs, the REST client and wire types, lenient response
//! parsing, and the stale-request supersession primitive.

pub mod client;
pub mod poll;
pub mod retry;
pub mod supersede;
pub mod validation;

pub use client::{GeminiClient, MediaPayload};
pub use poll::{PollConfig, await_completion};
pub use retry::{RetryPolicy, with_retry};
pub use supersede::{RequestToken, RequestTracker};
pub use validation::parse_lenient;
