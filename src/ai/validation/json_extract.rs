//! Lenient JSON Extraction
//!
//! Models occasionally wrap their JSON output in markdown code fences, leave
//! a trailing comma, drop a closing bracket, or surround the payload with
//! prose. These are formatting damage, not shape violations, so they are
//! repaired here before schema parsing ever sees the text.

use serde_json::Value;
use tracing::debug;

use crate::types::{Result, TravelError};

/// Parse model output as JSON, repairing common formatting damage first.
///
/// Repair stages, applied only when the direct parse fails:
/// 1. strip markdown code fences
/// 2. drop trailing commas, append missing closers
/// 3. extract the first JSON object/array embedded in surrounding prose
pub fn parse_lenient(raw: &str) -> Result<Value> {
    let cleaned = strip_code_fences(raw.trim());

    if let Ok(value) = serde_json::from_str::<Value>(&cleaned) {
        return Ok(value);
    }

    debug!("Direct JSON parse failed, attempting repair");

    let repaired = balance_closers(&drop_trailing_commas(&cleaned));
    if let Ok(value) = serde_json::from_str::<Value>(&repaired) {
        return Ok(value);
    }

    if let Some(embedded) = extract_embedded(&cleaned)
        && let Ok(value) = serde_json::from_str::<Value>(&embedded)
    {
        return Ok(value);
    }

    Err(TravelError::ResponseShapeInvalid(format!(
        "not valid JSON after repair. Content preview: {}",
        cleaned.chars().take(200).collect::<String>()
    )))
}

/// Remove ```json ... ``` or ``` ... ``` wrapping
fn strip_code_fences(s: &str) -> String {
    let mut result = s.to_string();

    if result.starts_with("```")
        && let Some(first_newline) = result.find('\n')
    {
        result = result[first_newline + 1..].to_string();
    }

    if result.ends_with("```") {
        result = result[..result.len() - 3].trim_end().to_string();
    }

    result.trim().to_string()
}

/// Drop commas that directly precede a closing brace/bracket
fn drop_trailing_commas(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len());

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ',' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && (chars[j] == ']' || chars[j] == '}') {
                i += 1;
                continue;
            }
        }
        result.push(chars[i]);
        i += 1;
    }

    result
}

/// Close unterminated strings and append missing brackets/braces
fn balance_closers(s: &str) -> String {
    let mut result = s.to_string();

    let mut braces = 0i32;
    let mut brackets = 0i32;
    let mut in_string = false;
    let mut escape = false;

    for ch in result.chars() {
        if escape {
            escape = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape = true,
            '"' => in_string = !in_string,
            '{' if !in_string => braces += 1,
            '}' if !in_string => braces -= 1,
            '[' if !in_string => brackets += 1,
            ']' if !in_string => brackets -= 1,
            _ => {}
        }
    }

    if in_string {
        result.push('"');
    }
    for _ in 0..brackets.max(0) {
        result.push(']');
    }
    for _ in 0..braces.max(0) {
        result.push('}');
    }

    result
}

/// Pull the first balanced JSON object/array out of surrounding prose
fn extract_embedded(s: &str) -> Option<String> {
    let start = s.find(['{', '['])?;

    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape = false;

    for (i, ch) in s[start..].char_indices() {
        if escape {
            escape = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape = true,
            '"' => in_string = !in_string,
            '{' | '[' if !in_string => depth += 1,
            '}' | ']' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(s[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parses_clean_json() {
        let value = parse_lenient(r#"{"distance": "3.2 km"}"#).unwrap();
        assert_eq!(value["distance"], "3.2 km");
    }

    #[test]
    fn test_strips_json_code_fences() {
        let raw = "```json\n{\"distance\": \"3.2 km\"}\n```";
        let value = parse_lenient(raw).unwrap();
        assert_eq!(value["distance"], "3.2 km");
    }

    #[test]
    fn test_drops_trailing_comma() {
        let value = parse_lenient(r#"{"reviews": ["good", "busy",]}"#).unwrap();
        assert_eq!(value["reviews"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_appends_missing_closers() {
        let value = parse_lenient(r#"{"reviews": ["good""#).unwrap();
        assert!(value["reviews"].is_array());
    }

    #[test]
    fn test_extracts_json_from_prose() {
        let raw = "Here is what I found:\n{\"distance\": \"1 km\"}\nHope that helps!";
        let value = parse_lenient(raw).unwrap();
        assert_eq!(value["distance"], "1 km");
    }

    #[test]
    fn test_plain_prose_is_rejected() {
        let result = parse_lenient("The fort is red and very old.");
        assert!(matches!(
            result,
            Err(TravelError::ResponseShapeInvalid(_))
        ));
    }

    proptest! {
        // Well-formed JSON must survive the lenient path untouched.
        #[test]
        fn prop_valid_json_roundtrips(
            key in "[a-z]{1,8}",
            text in "[a-zA-Z0-9 ]{0,32}",
            number in 0i64..10_000
        ) {
            let value = serde_json::json!({ key.clone(): text, "n": number });
            let raw = serde_json::to_string(&value).unwrap();
            let parsed = parse_lenient(&raw).unwrap();
            prop_assert_eq!(parsed, value);
        }
    }
}
