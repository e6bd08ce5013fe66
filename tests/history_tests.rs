//! HistoryTracker unit tests

#[cfg(test)]
mod tests {
    use atlas_engine::history::HistoryTracker;
    use atlas_engine::normalize::normalize_location;
    use atlas_engine::Location;
    use serde_json::json;

    fn loc(name: &str) -> Location {
        normalize_location(&json!({"name": name, "x": 0, "y": 0})).unwrap()
    }

    // -----------------------------------------------------------------------
    // Push, capacity, dedup
    // -----------------------------------------------------------------------

    #[test]
    fn newest_entry_sits_at_the_front() {
        let mut history = HistoryTracker::new(5);
        assert!(history.push(&loc("A")));
        assert!(history.push(&loc("B")));
        assert_eq!(history.names(), vec!["B", "A"]);
        assert_eq!(history.current().map(|l| l.name.as_str()), Some("B"));
    }

    #[test]
    fn capacity_drops_the_oldest() {
        let mut history = HistoryTracker::new(5);
        for name in ["A", "B", "C", "D", "E", "F"] {
            history.push(&loc(name));
        }
        assert_eq!(history.len(), 5);
        assert_eq!(history.names(), vec!["F", "E", "D", "C", "B"]);
    }

    #[test]
    fn duplicate_name_is_a_noop() {
        let mut history = HistoryTracker::new(5);
        history.push(&loc("A"));
        history.push(&loc("B"));
        // Re-visiting does not move A to the front.
        assert!(!history.push(&loc("A")));
        assert_eq!(history.names(), vec!["B", "A"]);
    }

    // -----------------------------------------------------------------------
    // Going back
    // -----------------------------------------------------------------------

    #[test]
    fn go_back_needs_two_entries() {
        let mut history = HistoryTracker::new(5);
        assert!(history.go_back().is_none());
        assert!(!history.can_go_back());

        history.push(&loc("A"));
        assert!(history.go_back().is_none());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn go_back_returns_the_previous_location() {
        let mut history = HistoryTracker::new(5);
        history.push(&loc("A"));
        history.push(&loc("B"));
        assert!(history.can_go_back());

        let previous = history.go_back().unwrap();
        assert_eq!(previous.name, "A");
        assert_eq!(history.names(), vec!["A"]);
        // Refresh-to-front: re-pushing the returned location is absorbed.
        assert!(!history.push(&previous));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn get_indexes_most_recent_first() {
        let mut history = HistoryTracker::new(5);
        history.push(&loc("A"));
        history.push(&loc("B"));
        assert_eq!(history.get(0).map(|l| l.name.as_str()), Some("B"));
        assert_eq!(history.get(1).map(|l| l.name.as_str()), Some("A"));
        assert!(history.get(2).is_none());
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut history = HistoryTracker::new(5);
        history.push(&loc("A"));
        history.clear();
        assert!(history.is_empty());
        assert!(history.current().is_none());
    }
}
