//! Declared Output Shapes
//!
//! Gemini `responseSchema` definitions for the JSON-returning capabilities.
//! These mirror the domain types in `crate::types`; the API enforces them
//! server-side so shaping failures are the exception, not the rule.

use serde_json::{Value, json};

/// Schema for the trip planning capability
pub(crate) fn trip_plan() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "destination": { "type": "STRING" },
            "duration": { "type": "STRING" },
            "weather": {
                "type": "OBJECT",
                "properties": {
                    "temperature": {
                        "type": "STRING",
                        "description": "Average temperature range (e.g. 24°C - 30°C)"
                    },
                    "condition": {
                        "type": "STRING",
                        "description": "General weather condition (e.g. Sunny with light breeze)"
                    },
                    "packingTip": {
                        "type": "STRING",
                        "description": "One short sentence on what to pack"
                    }
                }
            },
            "itinerary": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "INTEGER" },
                        "activities": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "meals": { "type": "ARRAY", "items": { "type": "STRING" } }
                    }
                }
            }
        }
    })
}

/// Schema for the destination culture capability
pub(crate) fn culture_info() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "destination": { "type": "STRING" },
            "history": { "type": "STRING" },
            "festivals": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "time": { "type": "STRING", "description": "Month or season" },
                        "description": { "type": "STRING" }
                    }
                }
            },
            "culinaryBackground": { "type": "STRING" },
            "dishes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    }
                }
            },
            "stories": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "story": { "type": "STRING" }
                    }
                }
            }
        }
    })
}

/// Schema for the packing checklist capability
pub(crate) fn packing_list() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "destination": { "type": "STRING" },
            "weatherSummary": {
                "type": "STRING",
                "description": "Brief summary of expected weather."
            },
            "categories": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "items": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "item": { "type": "STRING" },
                                    "reason": {
                                        "type": "STRING",
                                        "description": "Brief reason why this is needed (optional)"
                                    }
                                },
                                "required": ["item"]
                            }
                        }
                    }
                }
            }
        }
    })
}
