//! Unified Error Type System
//!
//! Centralized error types for the entire gateway.
//!
//! ## Error Taxonomy
//!
//! - **MissingInput**: a hard-required request parameter is absent (no call made)
//! - **RateLimited**: the upstream API rejected the call over quota (retried)
//! - **QuotaExceeded**: rate limiting persisted through the whole retry budget
//! - **ExternalCallFailed**: any other upstream failure (never retried)
//! - **ResponseShapeInvalid**: the response did not match its declared shape
//! - **GeolocationUnavailable**: the positioning source denied or lacks support
//! - **JobFailedNoResult**: a video job finished without producing media
//! - **JobTimedOut**: the optional polling bound elapsed before completion
//!
//! Remaining variants cover ambient concerns (IO, storage, config, JSON).

use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Geolocation Denial
// =============================================================================

/// Why the positioning source could not produce coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationDenial {
    /// The user or platform refused the position request
    PermissionDenied,
    /// The host has no positioning backend at all
    Unsupported,
}

impl std::fmt::Display for GeolocationDenial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum TravelError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Gateway Errors
    // -------------------------------------------------------------------------
    /// A hard-required input was absent; no external call was attempted
    #[error("Missing required input: {0}")]
    MissingInput(String),

    /// Upstream signalled a rate-limit condition; recovered via retry
    #[error("Rate limited by upstream API: {message}")]
    RateLimited {
        status: Option<u16>,
        message: String,
    },

    /// Rate limiting persisted through the whole retry budget
    #[error("You have exceeded your API quota. Please try again later.")]
    QuotaExceeded,

    /// Non-rate-limit upstream failure; propagated without retry
    #[error("External call failed{}: {}", status_suffix(.status), .message)]
    ExternalCallFailed {
        status: Option<u16>,
        message: String,
    },

    /// The response could not be shaped into its declared type
    #[error("Response shape invalid: {0}")]
    ResponseShapeInvalid(String),

    #[error("Geolocation unavailable: {0}")]
    GeolocationUnavailable(GeolocationDenial),

    /// The remote video job reported done without a result locator
    #[error("Video generation failed")]
    JobFailedNoResult,

    /// The configured polling bound elapsed before the job completed
    #[error("Video generation timed out after {0:?}")]
    JobTimedOut(Duration),

    // -------------------------------------------------------------------------
    // Ambient Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, TravelError>;

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({})", s)).unwrap_or_default()
}

// =============================================================================
// Rate-Limit Classification
// =============================================================================

impl TravelError {
    /// Classify this failure as a rate-limit condition.
    ///
    /// A failure qualifies when its HTTP status is 429, or its message text
    /// contains the substring "429" or the word "quota" (case-sensitive, as
    /// received from the error source). Everything else is non-retryable.
    pub fn is_rate_limit(&self) -> bool {
        if let Self::RateLimited { .. } = self {
            return true;
        }
        if let Self::ExternalCallFailed {
            status: Some(429), ..
        } = self
        {
            return true;
        }
        let message = self.to_string();
        message.contains("429") || message.contains("quota")
    }

    /// Create an external-call failure without an HTTP status (transport level)
    pub fn external(message: impl Into<String>) -> Self {
        Self::ExternalCallFailed {
            status: None,
            message: message.into(),
        }
    }

    /// Create an external-call failure from an HTTP status and response body.
    ///
    /// 429 maps to [`TravelError::RateLimited`]; everything else keeps the
    /// status and body for the caller.
    pub fn from_http_status(status: u16, body: impl Into<String>) -> Self {
        let message = body.into();
        if status == 429 {
            Self::RateLimited {
                status: Some(status),
                message,
            }
        } else {
            Self::ExternalCallFailed {
                status: Some(status),
                message,
            }
        }
    }

    /// True for errors surfaced to the user verbatim rather than logged
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::MissingInput(_) | Self::GeolocationUnavailable(_) | Self::QuotaExceeded
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_429_is_rate_limit() {
        let err = TravelError::from_http_status(429, "slow down");
        assert!(matches!(err, TravelError::RateLimited { .. }));
        assert!(err.is_rate_limit());
    }

    #[test]
    fn test_message_substring_classification() {
        let by_code = TravelError::external("upstream said 429, backing off");
        assert!(by_code.is_rate_limit());

        let by_word = TravelError::external("generativelanguage quota exhausted");
        assert!(by_word.is_rate_limit());

        // Classification is case-sensitive, as received from the source.
        let wrong_case = TravelError::external("QUOTA exhausted");
        assert!(!wrong_case.is_rate_limit());
    }

    #[test]
    fn test_other_failures_are_not_rate_limits() {
        assert!(!TravelError::from_http_status(500, "boom").is_rate_limit());
        assert!(!TravelError::MissingInput("destination".into()).is_rate_limit());
        assert!(!TravelError::JobFailedNoResult.is_rate_limit());
    }

    #[test]
    fn test_quota_exceeded_message_is_user_readable() {
        assert_eq!(
            TravelError::QuotaExceeded.to_string(),
            "You have exceeded your API quota. Please try again later."
        );
    }

    #[test]
    fn test_user_facing_variants() {
        assert!(TravelError::MissingInput("days".into()).is_user_facing());
        assert!(
            TravelError::GeolocationUnavailable(GeolocationDenial::PermissionDenied)
                .is_user_facing()
        );
        assert!(!TravelError::external("transport").is_user_facing());
    }

    #[test]
    fn test_external_call_failed_display_includes_status() {
        let err = TravelError::from_http_status(503, "unavailable");
        assert_eq!(err.to_string(), "External call failed (503): unavailable");
    }
}
