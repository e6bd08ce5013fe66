//! Collaborator seams: the rendering surfaces the core drives but does not
//! implement. The engine calls these symmetrically for marker and list-row
//! projections; hover/click *input* flows the other way, into
//! [`AtlasService`](crate::service::AtlasService) methods.
//!
//! Viewport marker and pan coordinates are `(y, x)` pairs — vertical axis
//! first, matching the map surface's convention.

use crate::catalog::EntryId;
use crate::types::Location;

/// Opaque handle to a marker issued by the viewport collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Icon resolution result handed to the viewport when a marker is created.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    /// Icon asset path resolved through the type registry (never missing —
    /// unknown categories resolve to the default icon).
    pub path: String,
    pub type_id: String,
}

/// The map surface: camera, markers, highlight.
pub trait Viewport {
    fn create_marker(&mut self, at: (f64, f64), icon: &IconSpec) -> MarkerHandle;
    fn attach(&mut self, marker: MarkerHandle);
    /// Detached markers must be fully removed, not merely hidden, to avoid
    /// stale hit-testing.
    fn detach(&mut self, marker: MarkerHandle);
    fn set_opacity(&mut self, marker: MarkerHandle, opacity: f64);
    fn set_highlight(&mut self, marker: MarkerHandle, on: bool);
    fn pan_to(&mut self, at: (f64, f64), zoom: f64);
}

/// The browsable list: rows, region grouping, filter controls, history trail.
pub trait SidebarView {
    fn set_row_visible(&mut self, entry: EntryId, visible: bool);
    /// Transient hover class, distinct from the sticky active class.
    fn set_row_hover(&mut self, entry: EntryId, on: bool);
    /// Sticky selected-state class; at most one row carries it.
    fn set_row_active(&mut self, entry: EntryId, on: bool);
    fn set_region_visible(&mut self, region: &str, visible: bool);
    fn set_region_expanded(&mut self, region: &str, expanded: bool);
    fn set_type_options(&mut self, options: &[String], selected: &str);
    /// Most-recent-first trail (excluding the current location) and whether
    /// the back affordance is shown.
    fn set_history(&mut self, trail: &[String], back_visible: bool);
}

/// Consumes the selected location to render title/description/gallery/extra
/// info. The core only supplies the entity.
pub trait DetailPresenter {
    fn present(&mut self, location: &Location);
}

/// At most one audio stream is ever active.
pub trait AudioPlayer {
    fn play(&mut self, path: &str);
    fn stop(&mut self);
}
