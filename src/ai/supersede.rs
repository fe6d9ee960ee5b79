//! Stale-Request Supersession
//!
//! Independent invocations carry no ordering guarantee, so a slow older call
//! can resolve after a newer one and clobber shared UI state. The tracker
//! makes "last request started wins" enforceable: the caller takes a token
//! when it starts an invocation and checks it is still current before
//! committing the result. A newer `begin` supersedes every older token; the
//! underlying task still runs to completion, its result is simply discarded.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one started invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic generation counter shared by one UI surface
#[derive(Debug, Default)]
pub struct RequestTracker {
    current: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new invocation, superseding all earlier ones
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` is still the most recently started invocation
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }
}
