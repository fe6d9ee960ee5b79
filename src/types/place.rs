//! Place & Navigation Types

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair from the positioning source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A place surfaced by grounded search.
///
/// `uri` and `address` are present only when the grounding source supplied
/// them; a best-effort suggestion carries a description alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Place {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            uri: None,
            address: None,
        }
    }
}

/// Detailed information for a single place
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    /// e.g. "3.2 km" or "Unknown"
    pub distance: String,
    #[serde(default)]
    pub reviews: Vec<String>,
    pub visual_description: String,
}

impl PlaceDetails {
    /// Minimal record built from raw response text when structured parsing
    /// fails. Distance is unknowable at that point; the text becomes the
    /// visual description.
    pub fn from_raw_text(text: impl Into<String>) -> Self {
        Self {
            distance: "Unknown".to_string(),
            reviews: Vec::new(),
            visual_description: text.into(),
        }
    }
}
