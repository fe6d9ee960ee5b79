//! Trip Planning Types
//!
//! Structured itinerary produced by the planning capability. These are pure
//! data shapes deserialized straight from the model's schema-constrained JSON.

use serde::{Deserialize, Serialize};

/// Typical weather for the destination over the trip window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherOutlook {
    /// Average temperature range (e.g. "24°C - 30°C")
    pub temperature: String,
    /// General condition (e.g. "Sunny with light breeze")
    pub condition: String,
    /// One short sentence on what to pack
    pub packing_tip: String,
}

/// A single day of the itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub meals: Vec<String>,
}

/// Complete trip plan for a destination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub destination: String,
    /// Human-readable duration (e.g. "3 days")
    pub duration: String,
    #[serde(default)]
    pub weather: Option<WeatherOutlook>,
    #[serde(default)]
    pub itinerary: Vec<DayPlan>,
}
