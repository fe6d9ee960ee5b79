//! Configuration Types
//!
//! All configuration structures with sensible defaults. The API credential
//! enters the process here (file or `YATRA_*` environment) and nowhere else;
//! it is never serialized back out and is redacted in debug output.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upstream API settings (credential, endpoint, timeouts)
    pub api: ApiConfig,

    /// Retry-with-backoff policy for every external call
    pub retry: RetryConfig,

    /// Video job polling settings
    pub video: VideoConfig,

    /// Model identifiers per capability
    pub models: ModelConfig,

    /// Local persistence settings
    pub storage: StorageConfig,
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `TravelError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(crate::types::TravelError::Config(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.retry.initial_delay_ms == 0 {
            return Err(crate::types::TravelError::Config(
                "retry.initial_delay_ms must be greater than 0".to_string(),
            ));
        }

        if self.retry.backoff_multiplier < 2 {
            return Err(crate::types::TravelError::Config(format!(
                "retry.backoff_multiplier must be at least 2, got {}",
                self.retry.backoff_multiplier
            )));
        }

        if self.video.poll_interval_ms == 0 {
            return Err(crate::types::TravelError::Config(
                "video.poll_interval_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Programmatic construction with just a credential (tests, embedding)
    pub fn with_api_key(key: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.api.key = Some(key.into());
        config
    }
}

// =============================================================================
// API Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API credential. Never serialized to output for security.
    #[serde(skip_serializing)]
    pub key: Option<String>,

    /// Endpoint root
    pub base: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("base", &self.base)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            base: constants::network::API_BASE.to_string(),
            timeout_secs: constants::network::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: constants::network::CONNECTION_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Retry Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the initial attempt
    pub max_retries: u32,

    /// Delay before the first retry (milliseconds)
    pub initial_delay_ms: u64,

    /// Delay multiplier per retry
    pub backoff_multiplier: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: constants::retry::DEFAULT_MAX_RETRIES,
            initial_delay_ms: constants::retry::INITIAL_DELAY_MS,
            backoff_multiplier: constants::retry::BACKOFF_MULTIPLIER,
        }
    }
}

// =============================================================================
// Video Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Fixed wait between status checks (milliseconds)
    pub poll_interval_ms: u64,

    /// Optional wall-clock bound on the polling loop (seconds).
    /// Unset preserves the original behavior: poll until the job reports done.
    pub poll_timeout_secs: Option<u64>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: constants::video::POLL_INTERVAL_MS,
            poll_timeout_secs: None,
        }
    }
}

// =============================================================================
// Model Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub text: String,
    pub image: String,
    pub image_edit: String,
    pub video: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            text: constants::models::TEXT.to_string(),
            image: constants::models::IMAGE.to_string(),
            image_edit: constants::models::IMAGE_EDIT.to_string(),
            video: constants::models::VIDEO.to_string(),
        }
    }
}

// =============================================================================
// Storage Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file backing the favorites store
    pub favorites_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            favorites_path: PathBuf::from(constants::favorites::DEFAULT_DB_FILE),
        }
    }
}
