//! Validator unit tests

#[cfg(test)]
mod tests {
    use atlas_engine::normalize::normalize_dataset;
    use atlas_engine::types::{TypeDefinition, TypeRegistry};
    use atlas_engine::validate::validate;
    use serde_json::json;
    use std::collections::HashMap;

    fn registry(ids: &[&str]) -> TypeRegistry {
        let mut types = HashMap::new();
        for id in ids {
            types.insert(
                id.to_string(),
                TypeDefinition {
                    icon: format!("assets/icons/{id}.png"),
                    zoom: 3.0,
                },
            );
        }
        TypeRegistry::new(types)
    }

    // -----------------------------------------------------------------------
    // Clean data
    // -----------------------------------------------------------------------

    #[test]
    fn clean_dataset_reports_nothing() {
        let dataset = normalize_dataset(&json!({
            "North": [
                {"name": "Port Royal", "x": 1, "y": 2, "type": "port",
                 "images": ["assets/img/a.png"], "audio": "assets/sounds/a.ogg"},
            ],
        }));
        assert!(validate(&dataset, &registry(&["port"]), "assets/").is_empty());
    }

    // -----------------------------------------------------------------------
    // Per-location checks run independently, in order
    // -----------------------------------------------------------------------

    #[test]
    fn one_location_can_raise_several_issues() {
        // No name, unparseable-to-finite x ("inf" survives numeric coercion),
        // and an unregistered type.
        let dataset = normalize_dataset(&json!({
            "North": [{"x": "inf", "y": 2, "type": "ghost"}],
        }));
        let issues = validate(&dataset, &registry(&["port"]), "assets/");
        assert_eq!(
            issues,
            vec![
                "North index 0: missing name".to_string(),
                "unknown: invalid coordinates".to_string(),
                "unknown: unknown type \"ghost\"".to_string(),
            ]
        );
    }

    #[test]
    fn default_type_is_never_reported_unknown() {
        let dataset = normalize_dataset(&json!({
            "North": [{"name": "Plain", "x": 1, "y": 2}],
        }));
        assert!(validate(&dataset, &registry(&[]), "assets/").is_empty());
    }

    // -----------------------------------------------------------------------
    // Duplicates
    // -----------------------------------------------------------------------

    #[test]
    fn duplicate_names_attributed_to_second_occurrence() {
        let dataset = normalize_dataset(&json!({
            "North": [{"name": "Port Royal", "x": 1, "y": 2, "type": "port"}],
            "South": [
                {"name": "Solitude", "x": 3, "y": 4, "type": "port"},
                {"name": "Port Royal", "x": 5, "y": 6, "type": "port"},
            ],
        }));
        let issues = validate(&dataset, &registry(&["port"]), "assets/");
        // Exactly one issue, raised where the second occurrence sits.
        assert_eq!(issues, vec!["Port Royal: duplicate name".to_string()]);
    }

    // -----------------------------------------------------------------------
    // Asset path convention
    // -----------------------------------------------------------------------

    #[test]
    fn bad_asset_paths_are_listed() {
        let dataset = normalize_dataset(&json!({
            "North": [{
                "name": "Keep", "x": 1, "y": 2, "type": "port",
                "images": ["assets/ok.png", "img/b.png", "http://c.png"],
                "audio": "music/theme.mp3",
            }],
        }));
        let issues = validate(&dataset, &registry(&["port"]), "assets/");
        assert_eq!(
            issues,
            vec![
                "Keep: invalid image path (img/b.png, http://c.png)".to_string(),
                "Keep: invalid audio path (music/theme.mp3)".to_string(),
            ]
        );
    }

    // -----------------------------------------------------------------------
    // Determinism
    // -----------------------------------------------------------------------

    #[test]
    fn validation_is_a_pure_function_of_its_inputs() {
        let dataset = normalize_dataset(&json!({
            "North": [
                {"x": "inf", "y": 2, "type": "ghost"},
                {"name": "Keep", "x": 1, "y": 2, "images": ["b.png"]},
                {"name": "Keep", "x": 1, "y": 2},
            ],
        }));
        let reg = registry(&["port"]);
        let first = validate(&dataset, &reg, "assets/");
        let second = validate(&dataset, &reg, "assets/");
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
