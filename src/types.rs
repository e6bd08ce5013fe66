//! Core atlas types shared across all modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Sentinels
// ---------------------------------------------------------------------------

/// Display name used when a raw record carries no usable name.
pub const UNKNOWN_NAME: &str = "unknown";
/// Category id used when a raw record carries no usable type.
pub const DEFAULT_TYPE: &str = "default";
/// Type-filter value meaning "no type restriction".
pub const TYPE_ALL: &str = "all";
/// Placeholder name for a PNJ record without one.
pub const PNJ_PLACEHOLDER: &str = "PNJ";

// ---------------------------------------------------------------------------
// Type registry
// ---------------------------------------------------------------------------

fn default_zoom_level() -> f64 {
    3.0
}

/// Per-category icon asset and default zoom level, immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeDefinition {
    pub icon: String,
    #[serde(default = "default_zoom_level")]
    pub zoom: f64,
}

/// Lookup table from category id to [`TypeDefinition`].
///
/// Resolution never fails: unknown ids fall back to the built-in default
/// definition, so icon and zoom lookup are total functions.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDefinition>,
    fallback: TypeDefinition,
}

impl TypeRegistry {
    pub fn new(types: HashMap<String, TypeDefinition>) -> Self {
        Self::with_fallback(
            types,
            TypeDefinition {
                icon: "assets/icons/default.png".to_string(),
                zoom: default_zoom_level(),
            },
        )
    }

    pub fn with_fallback(types: HashMap<String, TypeDefinition>, fallback: TypeDefinition) -> Self {
        Self { types, fallback }
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.types.contains_key(type_id)
    }

    pub fn resolve(&self, type_id: &str) -> &TypeDefinition {
        self.types.get(type_id).unwrap_or(&self.fallback)
    }

    pub fn zoom_for(&self, type_id: &str) -> f64 {
        self.resolve(type_id).zoom
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// A person-of-interest attached to a location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PnjRecord {
    pub name: String,
    pub role: String,
    pub description: String,
}

/// One canonical point of interest.
///
/// Invariant: every sequence field is always a sequence, never a bare string
/// or null; `name` and `type_id` are non-empty. The normalizer guarantees
/// this shape unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    #[serde(rename = "type")]
    pub type_id: String,
    pub x: f64,
    pub y: f64,
    pub description: String,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub audio: Option<String>,
    pub history: Vec<String>,
    pub quests: Vec<String>,
    pub lore: Vec<String>,
    pub pnjs: Vec<PnjRecord>,
}

// ---------------------------------------------------------------------------
// Normalized dataset
// ---------------------------------------------------------------------------

/// One named region ("continent") and its locations, in dataset order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionData {
    pub name: String,
    pub locations: Vec<Location>,
}

/// A fully normalized dataset.
///
/// Regions are an ordered sequence, not a map, so validation and catalog
/// construction iterate in dataset order deterministically.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub regions: Vec<RegionData>,
}

impl Dataset {
    pub fn location_count(&self) -> usize {
        self.regions.iter().map(|r| r.locations.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// The current `{text, type}` predicate applied to all entries.
///
/// Text is stored trimmed and lower-cased; the type is a category id or
/// [`TYPE_ALL`]. Replaced wholesale on reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    text: String,
    type_id: String,
}

impl FilterState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn set_text(&mut self, raw: &str) {
        self.text = raw.trim().to_lowercase();
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    pub fn set_type(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.type_id = if trimmed.is_empty() {
            TYPE_ALL.to_string()
        } else {
            trimmed.to_string()
        };
    }

    pub fn relax_type(&mut self) {
        self.type_id = TYPE_ALL.to_string();
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn has_type(&self) -> bool {
        self.type_id != TYPE_ALL
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            text: String::new(),
            type_id: TYPE_ALL.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Stats & config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasStats {
    pub regions: usize,
    pub locations: usize,
    pub visible_locations: usize,
    pub selected: Option<String>,
    pub history_len: usize,
    pub loads: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AtlasConfig {
    /// Required prefix for every referenced image/audio asset path.
    pub asset_root: String,
    /// Directory prefix for marker icon assets.
    pub icon_base: String,
    /// Zoom level used when a category defines none.
    pub default_zoom: f64,
    /// Capacity of the most-recently-visited queue.
    pub history_capacity: usize,
    /// Attention-blink opacity toggle interval in milliseconds.
    pub blink_interval_ms: u64,
    /// Total attention-blink duration in milliseconds.
    pub blink_duration_ms: u64,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            asset_root: "assets/".to_string(),
            icon_base: "assets/icons/".to_string(),
            default_zoom: default_zoom_level(),
            history_capacity: 5,
            blink_interval_ms: 300,
            blink_duration_ms: 1200,
        }
    }
}

impl AtlasConfig {
    /// The [`TypeDefinition`] used for category ids absent from the registry.
    pub fn fallback_type(&self) -> TypeDefinition {
        TypeDefinition {
            icon: format!("{}default.png", self.icon_base),
            zoom: self.default_zoom,
        }
    }
}
