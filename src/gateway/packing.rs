//! Packing Checklist
//!
//! The one capability with a post-validation repair: the prompt demands an
//! Emergency Toolkit category, and if the model still omits one, a fixed
//! fallback category is appended before the list is returned.

use serde_json::Value;
use tracing::{info, warn};

use super::{Gateway, require, schemas};
use crate::types::{PackingCategory, PackingItem, PackingList, Result, TravelError};

/// Fallback safety items appended when the model omits the toolkit category
const EMERGENCY_FALLBACK_ITEMS: [(&str, &str); 6] = [
    ("Basic First Aid Kit", "For minor injuries"),
    ("Power Bank & Cables", "Communication backup"),
    ("Emergency Cash", "Digital payments backup"),
    ("Flashlight", "Power outages"),
    ("ID Photocopies", "Loss of originals"),
    ("Local Emergency Numbers", "Police/Ambulance"),
];

impl Gateway {
    /// Destination-, weather-, and transport-aware packing checklist
    pub async fn packing_list(
        &self,
        destination: &str,
        days: u32,
        transport: &str,
    ) -> Result<PackingList> {
        require("destination", destination)?;
        require("transport", transport)?;
        if days == 0 {
            return Err(TravelError::MissingInput("day count".to_string()));
        }

        let prompt = format!(
            "Generate a detailed packing checklist for a {}-day trip to {} via {}.\n\
             Consider the local weather, culture, and mode of transport restrictions.\n\
             Organize items into logical categories.\n\
             CRITICAL: You MUST include a category named \"Emergency Toolkit\" with safety essentials appropriate for the destination and transport mode.\n\
             Other categories example: Clothing, Toiletries, Electronics, Documents, Health.\n\
             Provide a brief weather summary.",
            days, destination, transport
        );

        info!(destination, days, transport, "Generating packing checklist");

        let value = self
            .generate_structured(prompt, schemas::packing_list())
            .await?;
        let mut list = shape_packing_list(value)?;
        ensure_emergency_toolkit(&mut list);

        Ok(list)
    }
}

fn shape_packing_list(value: Value) -> Result<PackingList> {
    serde_json::from_value(value)
        .map_err(|e| TravelError::ResponseShapeInvalid(format!("packing list: {}", e)))
}

/// Append the fixed Emergency Toolkit category when no category name
/// mentions emergency/toolkit (case-insensitive).
fn ensure_emergency_toolkit(list: &mut PackingList) {
    if list.has_emergency_toolkit() {
        return;
    }

    warn!("Model omitted the Emergency Toolkit category, appending fallback");
    list.categories.push(PackingCategory {
        category: "Emergency Toolkit".to_string(),
        items: EMERGENCY_FALLBACK_ITEMS
            .iter()
            .map(|(item, reason)| PackingItem::new(*item, *reason))
            .collect(),
    });
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::test_support::offline_gateway;
    use serde_json::json;

    fn list_with_categories(names: &[&str]) -> PackingList {
        PackingList {
            destination: "Manali".to_string(),
            weather_summary: Some("Cold mornings, mild afternoons".to_string()),
            categories: names
                .iter()
                .map(|name| PackingCategory {
                    category: name.to_string(),
                    items: vec![PackingItem::new("placeholder", "test")],
                })
                .collect(),
        }
    }

    #[test]
    fn test_missing_toolkit_appends_exactly_one_category() {
        let mut list = list_with_categories(&["Clothing", "Documents"]);
        ensure_emergency_toolkit(&mut list);

        assert_eq!(list.categories.len(), 3);
        let appended = list.categories.last().unwrap();
        assert_eq!(appended.category, "Emergency Toolkit");
        assert_eq!(appended.items.len(), 6);
        assert_eq!(appended.items[0].item, "Basic First Aid Kit");
        assert_eq!(
            appended.items[5].reason.as_deref(),
            Some("Police/Ambulance")
        );
    }

    #[test]
    fn test_existing_toolkit_is_left_alone() {
        let mut list = list_with_categories(&["Clothing", "emergency essentials"]);
        ensure_emergency_toolkit(&mut list);

        assert_eq!(list.categories.len(), 2);
        assert_eq!(
            list.categories
                .iter()
                .filter(|c| c.category.to_lowercase().contains("emergency"))
                .count(),
            1
        );
    }

    #[test]
    fn test_toolkit_named_category_counts() {
        let mut list = list_with_categories(&["Bike Toolkit"]);
        ensure_emergency_toolkit(&mut list);
        assert_eq!(list.categories.len(), 1);
    }

    #[test]
    fn test_shape_from_api_fixture() {
        let list = shape_packing_list(json!({
            "destination": "Manali",
            "weatherSummary": "Snow likely above 3000m",
            "categories": [
                {"category": "Clothing", "items": [{"item": "Down jacket", "reason": "Sub-zero evenings"}]}
            ]
        }))
        .unwrap();

        assert_eq!(list.destination, "Manali");
        assert_eq!(list.categories[0].items[0].item, "Down jacket");
    }

    #[tokio::test]
    async fn test_blank_transport_fails_before_any_call() {
        let gateway = offline_gateway();
        let result = gateway.packing_list("Manali", 4, " ").await;
        assert!(matches!(result, Err(TravelError::MissingInput(_))));
    }
}
