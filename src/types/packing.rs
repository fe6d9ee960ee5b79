//! Packing Checklist Types

use serde::{Deserialize, Serialize};

/// One item to pack, with an optional one-line justification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub item: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl PackingItem {
    pub fn new(item: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            reason: Some(reason.into()),
        }
    }
}

/// A named group of packing items (Clothing, Documents, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<PackingItem>,
}

/// Destination- and transport-aware packing checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingList {
    pub destination: String,
    #[serde(default)]
    pub weather_summary: Option<String>,
    #[serde(default)]
    pub categories: Vec<PackingCategory>,
}

impl PackingList {
    /// Whether any category name mentions an emergency/toolkit group
    /// (case-insensitive substring match).
    pub fn has_emergency_toolkit(&self) -> bool {
        self.categories.iter().any(|c| {
            let name = c.category.to_lowercase();
            name.contains("emergency") || name.contains("toolkit")
        })
    }
}
