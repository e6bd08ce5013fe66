//! Normalization of untrusted raw JSON records into the canonical model.
//!
//! Pure, no I/O, never errors: malformed values collapse to defaults and
//! non-object records are dropped. After normalization every sequence field
//! is a sequence, `name`/`type` are non-empty, and coordinates went through
//! numeric coercion with a joint zero fallback.

use crate::types::{
    Dataset, Location, PnjRecord, RegionData, DEFAULT_TYPE, PNJ_PLACEHOLDER, UNKNOWN_NAME,
};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Single record
// ---------------------------------------------------------------------------

/// Normalize one raw location record. Returns `None` iff the value is not a
/// JSON object; every other shape yields a canonical [`Location`].
pub fn normalize_location(raw: &Value) -> Option<Location> {
    let obj = raw.as_object()?;

    let name = trimmed(obj.get("name"))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let type_id = trimmed(obj.get("type"))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_TYPE.to_string());

    let mut x = coerce_coord(obj.get("x"));
    let mut y = coerce_coord(obj.get("y"));
    // Joint fallback: one bad axis invalidates both, not each independently.
    if x.is_nan() || y.is_nan() {
        x = 0.0;
        y = 0.0;
    }

    Some(Location {
        name,
        type_id,
        x,
        y,
        description: trimmed(obj.get("description")).unwrap_or_default(),
        images: string_entries(obj.get("images")),
        videos: string_entries(obj.get("videos")),
        audio: trimmed(obj.get("audio")).filter(|s| !s.is_empty()),
        history: text_block(obj.get("history")),
        quests: text_block(obj.get("quests")),
        lore: text_block(obj.get("lore")),
        pnjs: pnj_entries(obj.get("pnjs")),
    })
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Normalize a whole region→records mapping.
///
/// A region whose value is not an array keeps its name with an empty
/// location list; non-object records are dropped silently (they are filtered
/// upstream of validation by design and never reported as issues).
pub fn normalize_dataset(raw: &Value) -> Dataset {
    let mut regions = Vec::new();

    if let Some(map) = raw.as_object() {
        for (name, value) in map {
            let locations = match value {
                Value::Array(items) => items.iter().filter_map(normalize_location).collect(),
                _ => Vec::new(),
            };
            regions.push(RegionData {
                name: name.clone(),
                locations,
            });
        }
    }

    Dataset { regions }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn trimmed(value: Option<&Value>) -> Option<String> {
    value?.as_str().map(|s| s.trim().to_string())
}

/// Numeric coercion: JSON numbers pass through, strings are parsed, anything
/// else is NaN (resolved by the caller's joint fallback).
fn coerce_coord(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Media lists (`images`, `videos`) accept only the array shape: non-string
/// and empty entries are dropped, the rest trimmed.
fn string_entries(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

/// Free-text fields (`history`, `quests`, `lore`) accept three raw shapes:
/// an array (falsy entries dropped, the rest stringified and trimmed), a
/// single truthy scalar (wrapped into a one-element list), or anything else
/// (empty list).
fn text_block(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| is_truthy(item))
            .map(scalar_text)
            .collect(),
        Some(single) if is_truthy(single) => vec![scalar_text(single)],
        _ => Vec::new(),
    }
}

fn pnj_entries(value: Option<&Value>) -> Vec<PnjRecord> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| is_truthy(item))
        .map(|item| {
            let field = |key: &str| {
                item.get(key)
                    .and_then(Value::as_str)
                    .map(|s| s.trim().to_string())
            };
            // Each field defaults independently.
            PnjRecord {
                name: field("name").unwrap_or_else(|| PNJ_PLACEHOLDER.to_string()),
                role: field("role").unwrap_or_default(),
                description: field("description").unwrap_or_default(),
            }
        })
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Strings keep their trimmed content; other scalars keep their JSON text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}
