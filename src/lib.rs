//! YatraSaarthi - AI Travel Companion Gateway
//!
//! The service core of a travel-companion application: a typed gateway in
//! front of the Google Gemini API covering trip planning, destination
//! culture, packing checklists, grounded place discovery, route guidance,
//! and travel image/video generation.
//!
//! ## Core Features
//!
//! - **Retry With Backoff**: every external call is wrapped in a bounded
//!   exponential-backoff policy that recovers rate limiting and escalates to
//!   a quota error only once the budget is exhausted
//! - **Job Polling**: long-running video jobs are driven to completion by a
//!   fixed-interval polling loop, each status check individually retried
//! - **Typed Results**: every capability returns its declared shape or a
//!   typed error; capabilities with a defined fallback degrade explicitly
//!   via [`Shaped`]
//! - **Local Favorites**: SQLite-backed wholesale key-value cache of saved
//!   places
//!
//! ## Quick Start
//!
//! ```ignore
//! use yatrasaarthi::{ConfigLoader, Gateway};
//!
//! let gateway = Gateway::new(ConfigLoader::load()?)?;
//! let plan = gateway.plan_trip("Kyoto", 3, "food", None).await?;
//! println!("{} days planned", plan.itinerary.len());
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: retry wrapper, polling loop, REST client, response validation
//! - [`gateway`]: the nine capability operations
//! - [`config`]: Figment-based configuration with explicit credential injection
//! - [`storage`]: favorites persistence
//! - [`location`]: positioning seam

pub mod ai;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod location;
pub mod storage;
pub mod telemetry;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, ModelConfig, RetryConfig, VideoConfig};

// Error Types
pub use types::error::{GeolocationDenial, Result, TravelError};

// Gateway
pub use gateway::Gateway;

// Domain Types
pub use types::{
    AspectRatio, Coordinates, CultureInfo, DayPlan, Dish, Festival, GeneratedImage,
    GeneratedVideo, ImageSize, LocalStory, PackingCategory, PackingItem, PackingList, Place,
    PlaceDetails, Shaped, TripPlan, WeatherOutlook,
};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    // Polling
    PollConfig,
    // Supersession
    RequestToken,
    RequestTracker,
    // Retry
    RetryPolicy,
    await_completion,
    with_retry,
};

// =============================================================================
// Collaborator Re-exports
// =============================================================================

pub use location::{FixedLocation, LocationSource, NoLocation};
pub use storage::FavoritesStore;
