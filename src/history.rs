//! Bounded most-recently-visited queue, independent of filter state.
//!
//! Holds location value snapshots, not references into the catalog, so the
//! queue survives a reload structurally — the service purges it anyway
//! because stale snapshots no longer resolve to live entries.

use crate::types::Location;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct HistoryTracker {
    items: VecDeque<Location>,
    capacity: usize,
}

impl HistoryTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a visit. No-op if a location with the same name is already
    /// present anywhere in the queue; otherwise inserted at the front, with
    /// the oldest entry dropped past capacity. Returns whether the queue
    /// changed.
    pub fn push(&mut self, location: &Location) -> bool {
        if self.items.iter().any(|item| item.name == location.name) {
            return false;
        }

        self.items.push_front(location.clone());
        self.items.truncate(self.capacity);
        true
    }

    /// Step back: drop the front element and return a clone of the new
    /// front. `None` (and no mutation) when fewer than two entries exist.
    ///
    /// Re-selecting the returned location pushes it again, which the dedup
    /// rule turns into a no-op — refresh-to-front rather than a true pop and
    /// restore.
    pub fn go_back(&mut self) -> Option<Location> {
        if self.items.len() < 2 {
            return None;
        }

        self.items.pop_front();
        self.items.front().cloned()
    }

    pub fn get(&self, index: usize) -> Option<&Location> {
        self.items.get(index)
    }

    pub fn current(&self) -> Option<&Location> {
        self.items.front()
    }

    /// Display names, most-recent-first.
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }

    /// The back affordance is shown only with somewhere to go back to.
    pub fn can_go_back(&self) -> bool {
        self.items.len() > 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
