//! Place Discovery & Navigation
//!
//! Grounded search over Maps data, detailed place lookups with a defined
//! best-effort fallback, and short-form route guidance.

use tracing::{info, warn};

use super::{Gateway, require};
use crate::ai::client::wire::{GenerateContentRequest, GenerateContentResponse, LatLng};
use crate::ai::validation::parse_lenient;
use crate::types::{Coordinates, Place, PlaceDetails, Result, Shaped, TravelError};

impl From<Coordinates> for LatLng {
    fn from(coords: Coordinates) -> Self {
        Self {
            latitude: coords.latitude,
            longitude: coords.longitude,
        }
    }
}

impl Gateway {
    /// Find top places for a category, anchored either at a named location
    /// or at the caller's coordinates. One of the two anchors is required;
    /// with neither, the call fails before the API is touched.
    pub async fn search_places(
        &self,
        category: &str,
        coords: Option<Coordinates>,
        location_name: Option<&str>,
    ) -> Result<Vec<Place>> {
        require("category", category)?;

        let location_name = location_name.map(str::trim).filter(|name| !name.is_empty());

        let request = if let Some(name) = location_name {
            GenerateContentRequest::from_prompt(format!("Find top 5 {} in {}.", category, name))
                .grounded(None)
        } else if let Some(coords) = coords {
            GenerateContentRequest::from_prompt(format!("Find top 5 {} near me.", category))
                .grounded(Some(coords.into()))
        } else {
            return Err(TravelError::MissingInput(
                "location or coordinates".to_string(),
            ));
        };

        info!(category, "Searching places");

        let response = self.call_text_model(request).await?;
        Ok(shape_places(&response))
    }

    /// Detailed information for one place: approximate distance, a review
    /// summary, and a visual description.
    ///
    /// Returns [`Shaped::Degraded`] carrying the raw response text when the
    /// model's output cannot be parsed into the structured shape.
    pub async fn place_details(
        &self,
        place_name: &str,
        coords: Option<Coordinates>,
        location_text: Option<&str>,
    ) -> Result<Shaped<PlaceDetails>> {
        require("place name", place_name)?;

        let location_context = match (coords, location_text) {
            (Some(c), _) => format!(
                "Calculate the approximate distance from coordinates {}, {}.",
                c.latitude, c.longitude
            ),
            (None, Some(text)) if !text.trim().is_empty() => format!(
                "Calculate the approximate distance from the center of {}.",
                text
            ),
            _ => "Distance not applicable (unknown user location).".to_string(),
        };

        let prompt = format!(
            "Provide detailed information for the place \"{}\".\n\
             {}\n\
             Provide a summary of 3 recent or popular reviews (what people generally love or dislike).\n\
             Provide a vivid visual description of what the place looks like (architecture, vibe, colors).\n\
             \n\
             Return the output as a valid JSON object with the following keys:\n\
             \"distance\" (string, e.g. \"3.2 km\" or \"Unknown\"),\n\
             \"reviews\" (array of strings),\n\
             \"visualDescription\" (string).\n\
             \n\
             Do not wrap the JSON in markdown code blocks (like ```json). Just return the raw JSON string.",
            place_name, location_context
        );

        let request =
            GenerateContentRequest::from_prompt(prompt).grounded(coords.map(LatLng::from));

        info!(place_name, "Fetching place details");

        let response = self.call_text_model(request).await?;
        let text = response.text().ok_or_else(|| {
            TravelError::ResponseShapeInvalid("place details response carried no text".to_string())
        })?;

        Ok(shape_place_details(text))
    }

    /// Short, friendly route guide from the caller's position to a
    /// destination: distance/time estimates, landmarks, one tip.
    pub async fn route_guidance(
        &self,
        coords: Coordinates,
        destination: &str,
    ) -> Result<String> {
        require("destination", destination)?;

        let prompt = format!(
            "I am currently at coordinates {}, {}. I want to go to \"{}\".\n\
             Using Google Maps data, provide a concise travel guide.\n\
             Include:\n\
             1. Estimated distance and time (driving vs walking).\n\
             2. Key landmarks I might pass.\n\
             3. A quick tip for this route.\n\
             Keep it brief, friendly, and formatted (use **bold** for key points).",
            coords.latitude, coords.longitude, destination
        );

        let request =
            GenerateContentRequest::from_prompt(prompt).grounded(Some(coords.into()));

        info!(destination, "Fetching route guidance");

        let response = self.call_text_model(request).await?;
        response.text().ok_or_else(|| {
            TravelError::ResponseShapeInvalid("route guidance response carried no text".to_string())
        })
    }
}

/// Places out of grounding chunks; best-effort single suggestion when the
/// structured data is missing but text is present.
fn shape_places(response: &GenerateContentResponse) -> Vec<Place> {
    let mut places = Vec::new();

    for chunk in response.grounding_chunks() {
        if let Some(web) = &chunk.web
            && let (Some(uri), Some(title)) = (&web.uri, &web.title)
        {
            places.push(Place {
                name: title.clone(),
                uri: Some(uri.clone()),
                address: None,
                description: Some("Found via Web Search".to_string()),
            });
        } else if let Some(maps) = &chunk.maps
            && let (Some(uri), Some(title)) = (&maps.uri, &maps.title)
        {
            places.push(Place {
                name: title.clone(),
                uri: Some(uri.clone()),
                address: maps.place_id.clone(),
                description: Some("View on Google Maps".to_string()),
            });
        }
    }

    if places.is_empty()
        && let Some(text) = response.text()
    {
        places.push(Place {
            name: "AI Suggestion".to_string(),
            description: Some(text),
            uri: None,
            address: None,
        });
    }

    places
}

/// Structured parse with the defined degradation to raw text
fn shape_place_details(text: String) -> Shaped<PlaceDetails> {
    match parse_lenient(&text).and_then(|value| {
        serde_json::from_value::<PlaceDetails>(value)
            .map_err(|e| TravelError::ResponseShapeInvalid(e.to_string()))
    }) {
        Ok(details) => Shaped::Parsed(details),
        Err(err) => {
            warn!(error = %err, "Place details parse failed, degrading to raw text");
            Shaped::Degraded(text)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::test_support::offline_gateway;
    use serde_json::json;

    fn response_from(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_search_without_anchor_fails_before_any_call() {
        let gateway = offline_gateway();
        let result = gateway.search_places("cafes", None, None).await;
        assert!(matches!(result, Err(TravelError::MissingInput(_))));
    }

    #[tokio::test]
    async fn test_search_with_blank_location_and_no_coords_fails() {
        let gateway = offline_gateway();
        let result = gateway.search_places("cafes", None, Some("   ")).await;
        assert!(matches!(result, Err(TravelError::MissingInput(_))));
    }

    #[test]
    fn test_shape_places_reads_both_chunk_kinds() {
        let response = response_from(json!({
            "candidates": [{
                "content": {"parts": [{"text": "Here are some places"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://cafes.example", "title": "Blue Tokai"}},
                        {"maps": {
                            "uri": "https://maps.example/p1",
                            "title": "Third Wave Coffee",
                            "placeId": "ChIJxyz"
                        }}
                    ]
                }
            }]
        }));

        let places = shape_places(&response);
        assert_eq!(places.len(), 2);

        assert_eq!(places[0].name, "Blue Tokai");
        assert_eq!(places[0].description.as_deref(), Some("Found via Web Search"));
        assert!(places[0].address.is_none());

        assert_eq!(places[1].name, "Third Wave Coffee");
        assert_eq!(places[1].address.as_deref(), Some("ChIJxyz"));
        assert_eq!(
            places[1].description.as_deref(),
            Some("View on Google Maps")
        );
    }

    #[test]
    fn test_shape_places_skips_incomplete_chunks() {
        let response = response_from(json!({
            "candidates": [{
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://cafes.example"}},
                        {"maps": {"title": "No URI"}}
                    ]
                }
            }]
        }));

        assert!(shape_places(&response).is_empty());
    }

    #[test]
    fn test_shape_places_falls_back_to_text_suggestion() {
        let response = response_from(json!({
            "candidates": [{
                "content": {"parts": [{"text": "Try the old quarter north of the fort."}]}
            }]
        }));

        let places = shape_places(&response);
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "AI Suggestion");
        assert_eq!(
            places[0].description.as_deref(),
            Some("Try the old quarter north of the fort.")
        );
    }

    #[test]
    fn test_place_details_parses_structured_output() {
        let shaped = shape_place_details(
            json!({
                "distance": "3.2 km",
                "reviews": ["Great views", "Crowded on weekends", "Go early"],
                "visualDescription": "Red sandstone walls above a busy bazaar."
            })
            .to_string(),
        );

        let details = shaped.parsed().unwrap();
        assert_eq!(details.distance, "3.2 km");
        assert_eq!(details.reviews.len(), 3);
    }

    #[test]
    fn test_place_details_strips_code_fences() {
        let raw = "```json\n{\"distance\": \"1 km\", \"reviews\": [], \"visualDescription\": \"quiet ghat\"}\n```";
        let shaped = shape_place_details(raw.to_string());
        assert_eq!(shaped.parsed().unwrap().distance, "1 km");
    }

    #[test]
    fn test_place_details_degrades_to_raw_text() {
        let raw = "The fort sits on a basalt ridge overlooking the town.";
        let shaped = shape_place_details(raw.to_string());

        assert!(shaped.is_degraded());
        let details = shaped.unwrap_or_build(PlaceDetails::from_raw_text);
        assert_eq!(details.distance, "Unknown");
        assert_eq!(details.visual_description, raw);
    }

    #[tokio::test]
    async fn test_route_guidance_requires_destination() {
        let gateway = offline_gateway();
        let result = gateway
            .route_guidance(Coordinates::new(12.97, 77.59), "")
            .await;
        assert!(matches!(result, Err(TravelError::MissingInput(_))));
    }
}
