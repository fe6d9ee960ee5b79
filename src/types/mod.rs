pub mod culture;
pub mod error;
pub mod media;
pub mod packing;
pub mod place;
pub mod trip;

pub use culture::{CultureInfo, Dish, Festival, LocalStory};
pub use error::{GeolocationDenial, Result, TravelError};
pub use media::{AspectRatio, GeneratedImage, GeneratedVideo, ImageSize};
pub use packing::{PackingCategory, PackingItem, PackingList};
pub use place::{Coordinates, Place, PlaceDetails};
pub use trip::{DayPlan, TripPlan, WeatherOutlook};

// =============================================================================
// Tagged Parse Result
// =============================================================================

/// Outcome of shaping a model response that has a defined best-effort
/// fallback.
///
/// `Parsed` carries the fully structured value; `Degraded` carries the raw
/// response text when structured parsing failed but the capability degrades
/// gracefully instead of propagating the failure. Callers decide whether a
/// best-effort result is acceptable for their surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Shaped<T> {
    Parsed(T),
    Degraded(String),
}

impl<T> Shaped<T> {
    /// The structured value, if parsing fully succeeded
    pub fn parsed(self) -> Option<T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Degraded(_) => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }

    /// Collapse into `T`, building the fallback value from the raw text
    pub fn unwrap_or_build(self, build: impl FnOnce(String) -> T) -> T {
        match self {
            Self::Parsed(value) => value,
            Self::Degraded(raw) => build(raw),
        }
    }
}

#[cfg(test)]
mod shaped_tests {
    use super::*;

    #[test]
    fn test_parsed_passthrough() {
        let shaped: Shaped<u32> = Shaped::Parsed(7);
        assert!(!shaped.is_degraded());
        assert_eq!(shaped.parsed(), Some(7));
    }

    #[test]
    fn test_degraded_builds_fallback() {
        let shaped: Shaped<PlaceDetails> = Shaped::Degraded("a red fort".into());
        assert!(shaped.is_degraded());

        let details = shaped.unwrap_or_build(PlaceDetails::from_raw_text);
        assert_eq!(details.distance, "Unknown");
        assert!(details.reviews.is_empty());
        assert_eq!(details.visual_description, "a red fort");
    }
}
