//! Tracing Setup
//!
//! Opt-in subscriber initialization for host applications that do not bring
//! their own. `RUST_LOG` wins when set; otherwise the given default level
//! applies.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a formatted subscriber at the given default level
pub fn init(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
