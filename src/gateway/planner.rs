//! Trip Planning

use serde_json::Value;
use tracing::info;

use super::{Gateway, require, schemas};
use crate::types::{Result, TravelError, TripPlan};

impl Gateway {
    /// Plan a multi-day trip around the traveler's interests.
    ///
    /// An optional mood tailors itinerary pace and activity style.
    pub async fn plan_trip(
        &self,
        destination: &str,
        days: u32,
        interests: &str,
        mood: Option<&str>,
    ) -> Result<TripPlan> {
        require("destination", destination)?;
        if days == 0 {
            return Err(TravelError::MissingInput("day count".to_string()));
        }

        let mood_context = mood
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(|m| {
                format!(
                    "The traveler's current mood is \"{}\". \
                     Tailor the itinerary pace and activity style to match this mood.\n",
                    m
                )
            })
            .unwrap_or_default();

        let prompt = format!(
            "Plan a {}-day trip to {} focusing on {}.\n\
             {}Also provide typical weather conditions for a trip to this location.\n\
             Return a structured JSON response.",
            days, destination, interests, mood_context
        );

        info!(destination, days, "Generating trip plan");

        let value = self.generate_structured(prompt, schemas::trip_plan()).await?;
        shape_trip_plan(value)
    }
}

fn shape_trip_plan(value: Value) -> Result<TripPlan> {
    serde_json::from_value(value)
        .map_err(|e| TravelError::ResponseShapeInvalid(format!("trip plan: {}", e)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::test_support::offline_gateway;
    use serde_json::json;

    fn kyoto_fixture() -> Value {
        json!({
            "destination": "Kyoto",
            "duration": "3 days",
            "weather": {
                "temperature": "12°C - 18°C",
                "condition": "Crisp and clear",
                "packingTip": "Bring a light jacket for the evenings."
            },
            "itinerary": [
                {
                    "day": 1,
                    "activities": ["Fushimi Inari at dawn", "Nishiki Market walk"],
                    "meals": ["Street-side yatsuhashi", "Kaiseki dinner"]
                },
                {
                    "day": 2,
                    "activities": ["Arashiyama bamboo grove", "Tea ceremony"],
                    "meals": ["Yudofu lunch", "Ramen in Pontocho"]
                },
                {
                    "day": 3,
                    "activities": ["Kiyomizu-dera", "Gion evening stroll"],
                    "meals": ["Obanzai breakfast", "Izakaya crawl"]
                }
            ]
        })
    }

    #[test]
    fn test_three_day_plan_shapes_fully() {
        let plan = shape_trip_plan(kyoto_fixture()).unwrap();

        assert_eq!(plan.destination, "Kyoto");
        assert_eq!(plan.itinerary.len(), 3);
        for day in &plan.itinerary {
            assert!(!day.activities.is_empty());
            assert!(!day.meals.is_empty());
        }
        assert_eq!(
            plan.weather.unwrap().packing_tip,
            "Bring a light jacket for the evenings."
        );
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result = shape_trip_plan(json!({"itinerary": "not a list"}));
        assert!(matches!(
            result,
            Err(TravelError::ResponseShapeInvalid(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_destination_fails_before_any_call() {
        let gateway = offline_gateway();
        let result = gateway.plan_trip("  ", 3, "food", None).await;
        assert!(matches!(result, Err(TravelError::MissingInput(_))));
    }

    #[tokio::test]
    async fn test_zero_days_fails_before_any_call() {
        let gateway = offline_gateway();
        let result = gateway.plan_trip("Kyoto", 0, "food", None).await;
        assert!(matches!(result, Err(TravelError::MissingInput(_))));
    }
}
