//! AtlasService – the coordinating object owning catalog, filter state,
//! selection, history and the collaborator seams.
//!
//! All mutation happens through methods on this struct (UI callbacks call
//! straight into them), which keeps the projection rules testable without a
//! live view layer. Single-threaded, run-to-completion: no method awaits.

use crate::blink::{BlinkTick, BlinkToken, Blinker};
use crate::catalog::{Catalog, EntryId};
use crate::filter;
use crate::history::HistoryTracker;
use crate::normalize;
use crate::types::{
    AtlasConfig, AtlasStats, Dataset, FilterState, TypeDefinition, TypeRegistry, TYPE_ALL,
};
use crate::validate;
use crate::view::{AudioPlayer, DetailPresenter, IconSpec, SidebarView, Viewport};
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashMap;

pub struct AtlasService {
    config: AtlasConfig,
    registry: TypeRegistry,
    catalog: Catalog,
    filters: FilterState,
    selected: Option<EntryId>,
    history: HistoryTracker,
    blinker: Blinker,
    type_options: Vec<String>,
    loads: u64,
    viewport: Box<dyn Viewport>,
    sidebar: Box<dyn SidebarView>,
    presenter: Box<dyn DetailPresenter>,
    audio: Box<dyn AudioPlayer>,
}

impl AtlasService {
    pub fn new(
        config: AtlasConfig,
        viewport: Box<dyn Viewport>,
        sidebar: Box<dyn SidebarView>,
        presenter: Box<dyn DetailPresenter>,
        audio: Box<dyn AudioPlayer>,
    ) -> Self {
        let registry = TypeRegistry::with_fallback(HashMap::new(), config.fallback_type());
        let history = HistoryTracker::new(config.history_capacity);
        let blinker = Blinker::new(config.blink_interval_ms, config.blink_duration_ms);
        Self {
            config,
            registry,
            catalog: Catalog::new(),
            filters: FilterState::default(),
            selected: None,
            history,
            blinker,
            type_options: vec![TYPE_ALL.to_string()],
            loads: 0,
            viewport,
            sidebar,
            presenter,
            audio,
        }
    }

    // -----------------------------------------------------------------------
    // Dataset lifecycle
    // -----------------------------------------------------------------------

    /// Normalize and validate a raw dataset against a freshly loaded type
    /// registry, then rebuild the catalog wholesale. Returns the validation
    /// issue list (already reported through the log); issues never block
    /// loading.
    pub fn load_dataset(
        &mut self,
        types: HashMap<String, TypeDefinition>,
        raw: &Value,
    ) -> Vec<String> {
        let registry = TypeRegistry::with_fallback(types, self.config.fallback_type());
        let dataset = normalize::normalize_dataset(raw);
        let issues = validate::validate(&dataset, &registry, &self.config.asset_root);
        validate::report(&issues);

        self.registry = registry;
        self.rebuild(dataset);
        issues
    }

    fn rebuild(&mut self, dataset: Dataset) {
        // Tear down the previous projection. Idempotent: already-detached
        // markers are skipped.
        for entry in self.catalog.entries() {
            if entry.attached {
                self.viewport.detach(entry.marker);
            }
        }
        self.blinker.cancel();
        self.catalog.clear();
        self.selected = None;
        self.audio.stop();
        self.filters = FilterState::default();
        // Stale history snapshots no longer resolve to live entries; purge.
        self.history.clear();

        for region in dataset.regions {
            let region_index = self.catalog.push_region(region.name);
            for location in region.locations {
                let def = self.registry.resolve(&location.type_id);
                let icon = IconSpec {
                    path: def.icon.clone(),
                    type_id: location.type_id.clone(),
                };
                let marker = self.viewport.create_marker((location.y, location.x), &icon);
                self.viewport.attach(marker);
                self.catalog.push_entry(region_index, location, marker);
            }
        }
        self.loads += 1;

        // Option list is derived only after construction completes, so it
        // reflects the freshly built entry set.
        self.type_options = filter::type_options(self.catalog.entries());
        if !self.type_options.iter().any(|t| t == self.filters.type_id()) {
            self.filters.relax_type();
        }
        self.sidebar
            .set_type_options(&self.type_options, self.filters.type_id());

        self.apply_filters();
        self.sync_history_ui();
        debug!(
            "catalog rebuilt: {} regions, {} entries",
            self.catalog.region_count(),
            self.catalog.len()
        );
    }

    // -----------------------------------------------------------------------
    // Filter engine
    // -----------------------------------------------------------------------

    /// Recompute every entry's projection under the current filter state.
    /// Idempotent: re-applying an unchanged state produces no further
    /// attach/detach or show/hide transitions.
    pub fn apply_filters(&mut self) {
        let has_query = self.filters.has_text();
        let has_type = self.filters.has_type();
        let selected = self.selected;
        let mut region_has_visible = vec![false; self.catalog.region_count()];
        let mut selection_cleared = false;

        for entry in self.catalog.entries_mut() {
            let visible = filter::location_matches(&entry.location, &self.filters);

            if visible {
                if !entry.attached {
                    self.viewport.attach(entry.marker);
                    entry.attached = true;
                }
                self.viewport.set_opacity(entry.marker, 1.0);
                if selected == Some(entry.id) {
                    self.viewport.set_highlight(entry.marker, true);
                }
                region_has_visible[entry.region] = true;
            } else {
                self.viewport.set_opacity(entry.marker, 0.0);
                self.viewport.set_highlight(entry.marker, false);
                // Fully removed, not hidden: detached markers must not keep
                // hit-testing.
                if entry.attached {
                    self.viewport.detach(entry.marker);
                    entry.attached = false;
                }
                if selected == Some(entry.id) {
                    self.sidebar.set_row_active(entry.id, false);
                    selection_cleared = true;
                }
            }

            if entry.visible != visible {
                entry.visible = visible;
                self.sidebar.set_row_visible(entry.id, visible);
            }
        }

        if selection_cleared {
            // Silent: no history or presenter side effects.
            self.selected = None;
        }

        for (index, region) in self.catalog.regions_mut().enumerate() {
            let visible = region_has_visible[index];
            if region.visible != visible {
                region.visible = visible;
                self.sidebar.set_region_visible(&region.name, visible);
            }
            let expanded = visible && (has_query || has_type || region.is_open);
            if region.expanded != expanded {
                region.expanded = expanded;
                self.sidebar.set_region_expanded(&region.name, expanded);
            }
        }
    }

    pub fn set_text_filter(&mut self, text: &str) {
        self.filters.set_text(text);
        self.apply_filters();
    }

    pub fn clear_text_filter(&mut self) {
        self.set_text_filter("");
    }

    pub fn set_type_filter(&mut self, type_id: &str) {
        self.filters.set_type(type_id);
        self.apply_filters();
    }

    /// Replace the filter state wholesale with the identity filter.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.apply_filters();
    }

    pub fn toggle_region(&mut self, index: usize) {
        if let Some(region) = self.catalog.region_mut(index) {
            region.is_open = !region.is_open;
            self.apply_filters();
        }
    }

    pub fn set_all_regions(&mut self, open: bool) {
        for region in self.catalog.regions_mut() {
            region.is_open = open;
        }
        self.apply_filters();
    }

    // -----------------------------------------------------------------------
    // Hover (transient, symmetric between marker and row)
    // -----------------------------------------------------------------------

    pub fn hover_in(&mut self, id: EntryId) {
        let Some(entry) = self.catalog.entry(id) else {
            return;
        };
        self.viewport.set_highlight(entry.marker, true);
        self.sidebar.set_row_hover(id, true);
    }

    pub fn hover_out(&mut self, id: EntryId) {
        let Some(entry) = self.catalog.entry(id) else {
            return;
        };
        // Sticky-active entries keep their highlight.
        if self.selected != Some(id) {
            self.viewport.set_highlight(entry.marker, false);
        }
        self.sidebar.set_row_hover(id, false);
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Marker or row click: select and start the attention blink.
    pub fn activate(&mut self, id: EntryId) -> Option<BlinkToken> {
        self.sidebar.set_row_hover(id, false);
        if !self.select(id) {
            return None;
        }
        Some(self.start_blink(id))
    }

    /// Transition to one-selected(`id`), relaxing any filter that would hide
    /// the entry so the selection is guaranteed visible afterwards.
    pub fn select(&mut self, id: EntryId) -> bool {
        let Some(entry) = self.catalog.entry(id) else {
            warn!("selection requested for unknown entry {id}");
            return false;
        };
        let location = entry.location.clone();
        let marker = entry.marker;
        let region_index = entry.region;

        // Auto-relax before anything else.
        if self.filters.has_type() && self.filters.type_id() != location.type_id {
            self.filters.relax_type();
            self.sidebar
                .set_type_options(&self.type_options, self.filters.type_id());
        }
        if self.filters.has_text() && !location.name.to_lowercase().contains(self.filters.text()) {
            self.filters.clear_text();
        }
        self.apply_filters();

        // Exclusive sticky highlight: at most one active entry.
        for other in self.catalog.entries() {
            if other.id != id {
                self.sidebar.set_row_active(other.id, false);
                self.viewport.set_highlight(other.marker, false);
            }
        }
        self.sidebar.set_row_active(id, true);
        self.viewport.set_highlight(marker, true);
        self.selected = Some(id);

        // Expand the owning region regardless of filter-derived visibility.
        if let Some(region) = self.catalog.region_mut(region_index) {
            region.is_open = true;
            region.visible = true;
            region.expanded = true;
            let name = region.name.clone();
            self.sidebar.set_region_visible(&name, true);
            self.sidebar.set_region_expanded(&name, true);
        }

        let zoom = self.registry.zoom_for(&location.type_id);
        self.viewport.pan_to((location.y, location.x), zoom);
        self.presenter.present(&location);

        match &location.audio {
            Some(path) => self.audio.play(path),
            None => self.audio.stop(),
        }

        self.history.push(&location);
        self.sync_history_ui();

        debug!("selected '{}'", location.name);
        true
    }

    /// Resolve a location snapshot (e.g. from history) to a live entry by
    /// name. Resolution failure is logged and ignored.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        match self.catalog.find_by_name(name) {
            Some(id) => self.select(id),
            None => {
                warn!("'{name}' does not resolve to a loaded location");
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    /// Select the history item at `index` (0 = current location).
    pub fn select_history(&mut self, index: usize) -> bool {
        let Some(name) = self.history.get(index).map(|l| l.name.clone()) else {
            return false;
        };
        self.select_by_name(&name)
    }

    /// Step back in the visit history. No-op with fewer than two entries.
    pub fn go_back(&mut self) -> bool {
        let Some(previous) = self.history.go_back() else {
            return false;
        };
        self.sync_history_ui();
        self.select_by_name(&previous.name)
    }

    fn sync_history_ui(&mut self) {
        // The current location is not part of the rendered trail.
        let trail: Vec<String> = self.history.names().into_iter().skip(1).collect();
        self.sidebar.set_history(&trail, self.history.can_go_back());
    }

    // -----------------------------------------------------------------------
    // Attention blink
    // -----------------------------------------------------------------------

    /// Begin the attention blink on an entry's marker, cancelling any prior
    /// blink. The returned token must accompany every subsequent tick.
    pub fn start_blink(&mut self, id: EntryId) -> BlinkToken {
        let Some(entry) = self.catalog.entry(id) else {
            return self.blinker.current_token();
        };
        let marker = entry.marker;
        self.viewport.set_highlight(marker, true);
        self.blinker.start(id, marker)
    }

    /// Advance the blink by one interval. Returns whether the driving timer
    /// should keep ticking; stale tokens are ignored.
    pub fn blink_tick(&mut self, token: BlinkToken) -> bool {
        match self.blinker.tick(token) {
            BlinkTick::Stale => false,
            BlinkTick::Toggle { marker, opacity } => {
                self.viewport.set_opacity(marker, opacity);
                true
            }
            BlinkTick::Done { marker, entry } => {
                self.viewport.set_opacity(marker, 1.0);
                if self.selected != Some(entry) {
                    self.viewport.set_highlight(marker, false);
                }
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn stats(&self) -> AtlasStats {
        AtlasStats {
            regions: self.catalog.region_count(),
            locations: self.catalog.len(),
            visible_locations: self.catalog.visible_count(),
            selected: self
                .selected
                .and_then(|id| self.catalog.entry(id))
                .map(|e| e.location.name.clone()),
            history_len: self.history.len(),
            loads: self.loads,
        }
    }

    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selected(&self) -> Option<EntryId> {
        self.selected
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }

    pub fn type_options(&self) -> &[String] {
        &self.type_options
    }
}
