//! Destination Culture Types

use serde::{Deserialize, Serialize};

/// A recurring local festival
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Festival {
    pub name: String,
    /// Month or season the festival typically falls in
    pub time: String,
    pub description: String,
}

/// A must-try authentic local dish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub description: String,
}

/// A short local legend, myth, or community story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStory {
    pub title: String,
    pub story: String,
}

/// Cultural overview of a destination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureInfo {
    pub destination: String,
    pub history: String,
    #[serde(default)]
    pub festivals: Vec<Festival>,
    pub culinary_background: String,
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub stories: Vec<LocalStory>,
}
