//! Geolocation Seam
//!
//! The gateway never positions the user itself; callers obtain coordinates
//! from whatever positioning backend the host offers and pass them in. The
//! trait models that backend: it yields a coordinate pair or a typed denial,
//! which is surfaced to the user verbatim.

use async_trait::async_trait;

use crate::types::{Coordinates, GeolocationDenial, Result, TravelError};

/// A source of the caller's current position
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates>;
}

/// A known, fixed position (tests, or a user-entered home location)
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationSource for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates> {
        Ok(self.0)
    }
}

/// A host with no positioning backend at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl LocationSource for NoLocation {
    async fn current_position(&self) -> Result<Coordinates> {
        Err(TravelError::GeolocationUnavailable(
            GeolocationDenial::Unsupported,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_location_yields_its_coordinates() {
        let source = FixedLocation(Coordinates::new(27.17, 78.04));
        let coords = source.current_position().await.unwrap();
        assert_eq!(coords.latitude, 27.17);
        assert_eq!(coords.longitude, 78.04);
    }

    #[tokio::test]
    async fn test_no_location_reports_unsupported() {
        let result = NoLocation.current_position().await;
        assert!(matches!(
            result,
            Err(TravelError::GeolocationUnavailable(
                GeolocationDenial::Unsupported
            ))
        ));
    }
}
