//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Retry policy constants
pub mod retry {
    /// Default retry budget after the initial attempt (3 attempts total)
    pub const DEFAULT_MAX_RETRIES: u32 = 2;

    /// Initial delay before the first retry (milliseconds)
    pub const INITIAL_DELAY_MS: u64 = 2000;

    /// Multiplier applied to the delay after each retry
    pub const BACKOFF_MULTIPLIER: u32 = 2;
}

/// Video generation constants
pub mod video {
    /// Fixed wait between job status checks (milliseconds)
    pub const POLL_INTERVAL_MS: u64 = 5000;

    /// Prompt used when the caller provides none
    pub const DEFAULT_PROMPT: &str = "Animate this travel scene naturally";

    /// Mime type assumed when the media response carries no content type
    pub const FALLBACK_MIME_TYPE: &str = "video/mp4";
}

/// Model identifiers
pub mod models {
    /// Reasoning and grounded-search capabilities
    pub const TEXT: &str = "gemini-2.5-flash";

    /// Image generation
    pub const IMAGE: &str = "gemini-3-pro-image-preview";

    /// Image editing (image + instruction in, image out)
    pub const IMAGE_EDIT: &str = "gemini-2.5-flash-image";

    /// Video generation (long-running operation)
    pub const VIDEO: &str = "veo-3.1-fast-generate-preview";
}

/// HTTP/Network constants
pub mod network {
    /// Gemini REST endpoint root
    pub const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Connection timeout (seconds)
    pub const CONNECTION_TIMEOUT_SECS: u64 = 30;
}

/// Favorites store constants
pub mod favorites {
    /// Fixed key the favorites list lives under
    pub const STORE_KEY: &str = "yatrasaarthi_favorites";

    /// Default database file name
    pub const DEFAULT_DB_FILE: &str = "yatrasaarthi.db";
}
