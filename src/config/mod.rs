//! Configuration
//!
//! Typed configuration with a Figment resolution chain. The API credential
//! is injected here and flows into the gateway constructor explicitly;
//! nothing else in the crate reads process state.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ApiConfig, Config, ModelConfig, RetryConfig, StorageConfig, VideoConfig};
