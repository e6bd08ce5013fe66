//! Normalizer unit tests

#[cfg(test)]
mod tests {
    use atlas_engine::normalize::{normalize_dataset, normalize_location};
    use serde_json::json;

    // -----------------------------------------------------------------------
    // Record shape
    // -----------------------------------------------------------------------

    #[test]
    fn non_object_records_are_rejected() {
        assert!(normalize_location(&json!(null)).is_none());
        assert!(normalize_location(&json!("Port Royal")).is_none());
        assert!(normalize_location(&json!(42)).is_none());
        assert!(normalize_location(&json!(["name"])).is_none());
    }

    #[test]
    fn empty_object_gets_full_defaults() {
        let loc = normalize_location(&json!({})).unwrap();
        assert_eq!(loc.name, "unknown");
        assert_eq!(loc.type_id, "default");
        assert_eq!((loc.x, loc.y), (0.0, 0.0));
        assert!(loc.description.is_empty());
        assert!(loc.images.is_empty());
        assert!(loc.videos.is_empty());
        assert!(loc.audio.is_none());
        assert!(loc.history.is_empty());
        assert!(loc.quests.is_empty());
        assert!(loc.lore.is_empty());
        assert!(loc.pnjs.is_empty());
    }

    #[test]
    fn whitespace_name_and_type_fall_back_to_sentinels() {
        let loc = normalize_location(&json!({"name": "   ", "type": ""})).unwrap();
        assert_eq!(loc.name, "unknown");
        assert_eq!(loc.type_id, "default");

        let loc = normalize_location(&json!({"name": "  Gate  ", "type": " ruin "})).unwrap();
        assert_eq!(loc.name, "Gate");
        assert_eq!(loc.type_id, "ruin");
    }

    // -----------------------------------------------------------------------
    // Coordinates
    // -----------------------------------------------------------------------

    #[test]
    fn numeric_and_string_coordinates_are_accepted() {
        let loc = normalize_location(&json!({"x": 10, "y": 20.5})).unwrap();
        assert_eq!((loc.x, loc.y), (10.0, 20.5));

        let loc = normalize_location(&json!({"x": "10", "y": " 20 "})).unwrap();
        assert_eq!((loc.x, loc.y), (10.0, 20.0));
    }

    #[test]
    fn one_bad_coordinate_resets_both() {
        // Joint fallback: a single bad axis zeroes the pair.
        let loc = normalize_location(&json!({"x": 12, "y": "north"})).unwrap();
        assert_eq!((loc.x, loc.y), (0.0, 0.0));

        let loc = normalize_location(&json!({"x": [], "y": 7})).unwrap();
        assert_eq!((loc.x, loc.y), (0.0, 0.0));

        let loc = normalize_location(&json!({"y": 7})).unwrap();
        assert_eq!((loc.x, loc.y), (0.0, 0.0));
    }

    // -----------------------------------------------------------------------
    // Sequence fields
    // -----------------------------------------------------------------------

    #[test]
    fn free_text_fields_accept_a_single_value() {
        let loc = normalize_location(&json!({
            "history": "Founded long ago",
            "quests": 0,
            "lore": 42,
        }))
        .unwrap();
        assert_eq!(loc.history, vec!["Founded long ago"]);
        assert!(loc.quests.is_empty()); // falsy scalar
        assert_eq!(loc.lore, vec!["42"]);
    }

    #[test]
    fn free_text_arrays_drop_falsy_entries() {
        let loc = normalize_location(&json!({
            "history": ["first", null, "", false, "  second  ", 3],
        }))
        .unwrap();
        assert_eq!(loc.history, vec!["first", "second", "3"]);
    }

    #[test]
    fn media_lists_require_the_array_shape() {
        let loc = normalize_location(&json!({
            "images": "assets/solo.png",
            "videos": [" https://youtu.be/x ", 7, ""],
        }))
        .unwrap();
        assert!(loc.images.is_empty());
        assert_eq!(loc.videos, vec!["https://youtu.be/x"]);
    }

    #[test]
    fn audio_is_trimmed_or_absent() {
        let loc = normalize_location(&json!({"audio": "  assets/sounds/a.ogg "})).unwrap();
        assert_eq!(loc.audio.as_deref(), Some("assets/sounds/a.ogg"));

        let loc = normalize_location(&json!({"audio": "   "})).unwrap();
        assert!(loc.audio.is_none());

        let loc = normalize_location(&json!({"audio": 9})).unwrap();
        assert!(loc.audio.is_none());
    }

    #[test]
    fn pnj_fields_default_independently() {
        let loc = normalize_location(&json!({
            "pnjs": [
                {"name": " Ada ", "role": "  ", "description": "keeper"},
                {"role": "guide"},
                "ghost",
            ],
        }))
        .unwrap();
        assert_eq!(loc.pnjs.len(), 3);
        assert_eq!(loc.pnjs[0].name, "Ada");
        assert_eq!(loc.pnjs[0].role, "");
        assert_eq!(loc.pnjs[0].description, "keeper");
        assert_eq!(loc.pnjs[1].name, "PNJ");
        assert_eq!(loc.pnjs[1].role, "guide");
        assert_eq!(loc.pnjs[2].name, "PNJ");
    }

    // -----------------------------------------------------------------------
    // Dataset
    // -----------------------------------------------------------------------

    #[test]
    fn dataset_preserves_region_order() {
        let dataset = normalize_dataset(&json!({
            "Zeta": [{"name": "A"}],
            "Alpha": [{"name": "B"}],
            "Mid": [{"name": "C"}],
        }));
        let names: Vec<&str> = dataset.regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(dataset.location_count(), 3);
    }

    #[test]
    fn non_array_region_keeps_its_name_with_no_locations() {
        let dataset = normalize_dataset(&json!({"Broken": "not a list"}));
        assert_eq!(dataset.regions.len(), 1);
        assert_eq!(dataset.regions[0].name, "Broken");
        assert!(dataset.regions[0].locations.is_empty());
    }

    #[test]
    fn malformed_entries_are_dropped_silently() {
        let dataset = normalize_dataset(&json!({
            "North": ["text", 7, {"name": "Survivor"}, null],
        }));
        assert_eq!(dataset.regions[0].locations.len(), 1);
        assert_eq!(dataset.regions[0].locations[0].name, "Survivor");
    }

    #[test]
    fn non_object_dataset_is_empty() {
        assert!(normalize_dataset(&json!([1, 2])).regions.is_empty());
        assert!(normalize_dataset(&json!("nope")).regions.is_empty());
    }
}
