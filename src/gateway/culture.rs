//! Destination Culture & History

use serde_json::Value;
use tracing::info;

use super::{Gateway, require, schemas};
use crate::types::{CultureInfo, Result, TravelError};

impl Gateway {
    /// Cultural overview: concise history, festivals, culinary heritage,
    /// must-try dishes, and a couple of local stories.
    pub async fn destination_culture(&self, destination: &str) -> Result<CultureInfo> {
        require("destination", destination)?;

        let prompt = format!(
            "Provide a cultural overview of {}.\n\
             Include:\n\
             1. A concise history of the place (max 100 words).\n\
             2. A list of 3-5 major local festivals (name, typical time of year, and brief description).\n\
             3. A detailed background on the culinary heritage, explicitly covering historical influences, key ingredients, and food culture.\n\
             4. A list of 3 must-try authentic local dishes.\n\
             5. Two short local legends, myths, or heartwarming community stories (approx 50 words each) that give the place character.\n\
             Return as JSON.",
            destination
        );

        info!(destination, "Fetching cultural overview");

        let value = self
            .generate_structured(prompt, schemas::culture_info())
            .await?;
        shape_culture_info(value)
    }
}

fn shape_culture_info(value: Value) -> Result<CultureInfo> {
    serde_json::from_value(value)
        .map_err(|e| TravelError::ResponseShapeInvalid(format!("culture info: {}", e)))
}

// =============================================================================
// Tests
// =============================================================================
