//! Data-quality validation over a normalized dataset.
//!
//! Purely diagnostic: the validator never mutates its input, never panics,
//! and never blocks loading. Entries with issues are still loaded and
//! displayed. Issue ordering is deterministic — region order, then list
//! order, then check order — so identical input yields an identical report.

use crate::types::{Dataset, TypeRegistry, DEFAULT_TYPE, UNKNOWN_NAME};
use log::{info, warn};
use std::collections::HashSet;

/// Scan a normalized dataset against the type registry and the asset-root
/// path convention. All checks run independently; one location can raise
/// several issues.
pub fn validate(dataset: &Dataset, registry: &TypeRegistry, asset_root: &str) -> Vec<String> {
    let mut issues = Vec::new();
    // Duplicate detection uses one running set across all regions.
    let mut seen_names = HashSet::new();

    for region in &dataset.regions {
        for (index, location) in region.locations.iter().enumerate() {
            if location.name == UNKNOWN_NAME {
                issues.push(format!("{} index {}: missing name", region.name, index));
            }

            if !location.x.is_finite() || !location.y.is_finite() {
                issues.push(format!("{}: invalid coordinates", location.name));
            }

            if !registry.contains(&location.type_id) && location.type_id != DEFAULT_TYPE {
                issues.push(format!(
                    "{}: unknown type \"{}\"",
                    location.name, location.type_id
                ));
            }

            if !seen_names.insert(location.name.clone()) {
                issues.push(format!("{}: duplicate name", location.name));
            }

            let bad_images: Vec<&str> = location
                .images
                .iter()
                .filter(|path| !path.starts_with(asset_root))
                .map(String::as_str)
                .collect();
            if !bad_images.is_empty() {
                issues.push(format!(
                    "{}: invalid image path ({})",
                    location.name,
                    bad_images.join(", ")
                ));
            }

            if let Some(audio) = &location.audio {
                if !audio.starts_with(asset_root) {
                    issues.push(format!("{}: invalid audio path ({})", location.name, audio));
                }
            }
        }
    }

    issues
}

/// Emit the grouped diagnostic for an issue list, or a single OK line.
pub fn report(issues: &[String]) {
    if issues.is_empty() {
        info!("map data validation: OK");
        return;
    }

    warn!("map data validation: {} issue(s)", issues.len());
    for issue in issues {
        warn!("  {issue}");
    }
}
