//! Catalog: the authoritative entry set built once per dataset load.
//!
//! One [`Entry`] exists per loaded location for the lifetime of a load;
//! identity is the entry id handed out at construction, not the location
//! name (names may collide — the validator reports that separately).

use crate::types::Location;
use crate::view::MarkerHandle;

pub type EntryId = usize;

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One location bound to its region and its marker handle, plus the
/// projection state the filter engine maintains.
#[derive(Debug)]
pub struct Entry {
    pub id: EntryId,
    /// Index into the catalog's region list.
    pub region: usize,
    pub location: Location,
    pub marker: MarkerHandle,
    /// Whether the marker is currently attached to the viewport.
    pub attached: bool,
    /// Filter-derived visibility of row and marker.
    pub visible: bool,
}

/// Sidebar grouping descriptor for one region.
#[derive(Debug)]
pub struct RegionInfo {
    pub name: String,
    /// User-toggled open/closed flag, independent of filter state.
    pub is_open: bool,
    /// Whether any entry of this region is currently visible.
    pub visible: bool,
    /// Whether the content pane is currently expanded.
    pub expanded: bool,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Ordered entry set and region registry, rebuilt wholesale on reload.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    regions: Vec<RegionInfo>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.regions.clear();
    }

    pub fn push_region(&mut self, name: String) -> usize {
        self.regions.push(RegionInfo {
            name,
            is_open: false,
            visible: true,
            expanded: false,
        });
        self.regions.len() - 1
    }

    pub fn push_entry(&mut self, region: usize, location: Location, marker: MarkerHandle) -> EntryId {
        let id = self.entries.len();
        self.entries.push(Entry {
            id,
            region,
            location,
            marker,
            attached: true,
            visible: true,
        });
        id
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.get_mut(id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.entries.iter_mut()
    }

    pub fn regions(&self) -> &[RegionInfo] {
        &self.regions
    }

    pub fn region_mut(&mut self, index: usize) -> Option<&mut RegionInfo> {
        self.regions.get_mut(index)
    }

    pub fn regions_mut(&mut self) -> impl Iterator<Item = &mut RegionInfo> {
        self.regions.iter_mut()
    }

    /// First entry with the given display name, in construction order.
    pub fn find_by_name(&self, name: &str) -> Option<EntryId> {
        self.entries.iter().find(|e| e.location.name == name).map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.visible).count()
    }
}
