//! Atlas Engine
//!
//! Core of an interactive point-of-interest map: dataset normalization and
//! validation, plus the engine keeping three projections — map markers,
//! sidebar list, detail panel — consistent under filtering, selection and a
//! bounded navigation history.
//!
//! ## Architecture
//!
//! ```text
//! AtlasService  (service.rs)  ← filter/selection/history coordination
//!   ├── normalize / validate  ← raw JSON → canonical model + diagnostics
//!   ├── Catalog  (catalog.rs) ← entry set + region registry
//!   ├── HistoryTracker        ← bounded most-recently-visited queue
//!   ├── Blinker   (blink.rs)  ← token-guarded marker attention blink
//!   └── view traits (view.rs) ← Viewport / SidebarView / DetailPresenter / AudioPlayer
//! ```
//!
//! Rendering, camera animation, DOM and media playback live behind the
//! `view` traits; the engine only decides *what* each projection shows.

pub mod blink;
pub mod catalog;
pub mod filter;
pub mod history;
pub mod loader;
pub mod normalize;
pub mod service;
pub mod types;
pub mod validate;
pub mod view;

// Convenience re-exports
pub use blink::{BlinkTick, BlinkToken, Blinker};
pub use catalog::{Catalog, Entry, EntryId, RegionInfo};
pub use history::HistoryTracker;
pub use loader::AtlasError;
pub use service::AtlasService;
pub use types::{
    AtlasConfig, AtlasStats, Dataset, FilterState, Location, PnjRecord, RegionData,
    TypeDefinition, TypeRegistry,
};
pub use view::{AudioPlayer, DetailPresenter, IconSpec, MarkerHandle, SidebarView, Viewport};
