//! Pure filtering predicates and type-option derivation.
//!
//! The side-effecting filter pass itself lives on
//! [`AtlasService::apply_filters`](crate::service::AtlasService::apply_filters);
//! this module holds the stateless pieces so the rules are testable in
//! isolation.

use crate::catalog::Entry;
use crate::types::{FilterState, Location, DEFAULT_TYPE, TYPE_ALL};
use std::collections::HashSet;

/// Visibility rule for one location under the current filter state:
/// text match (empty query, or case-insensitive name containment) AND type
/// match ("all", or exact category id).
pub fn location_matches(location: &Location, filters: &FilterState) -> bool {
    let matches_text =
        !filters.has_text() || location.name.to_lowercase().contains(filters.text());
    let matches_type = !filters.has_type() || location.type_id == filters.type_id();
    matches_text && matches_type
}

/// Derive the type-filter option list from the loaded entries: the distinct
/// category ids actually present (excluding the default sentinel), sorted
/// case-insensitively, with "all" always first.
pub fn type_options(entries: &[Entry]) -> Vec<String> {
    let mut unique: HashSet<&str> = HashSet::new();
    for entry in entries {
        if entry.location.type_id != DEFAULT_TYPE {
            unique.insert(entry.location.type_id.as_str());
        }
    }

    let mut types: Vec<String> = unique.into_iter().map(String::from).collect();
    types.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));

    let mut options = Vec::with_capacity(types.len() + 1);
    options.push(TYPE_ALL.to_string());
    options.extend(types);
    options
}
