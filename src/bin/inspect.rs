//! atlas-inspect binary
//!
//! Loads a type registry and a location dataset, runs them through the
//! normalization and validation pipeline, and reports data-quality issues.
//! Exits non-zero when issues are found, so it can gate a dataset in CI.
//!
//! ## Configuration (env / TOML via `config` crate)
//!
//! | Key                      | Default            | Description                     |
//! |--------------------------|--------------------|---------------------------------|
//! | `ATLAS_TYPES`            | `assets/types.json`| Type registry resource          |
//! | `ATLAS_LOCATIONS`        | `assets/locations.json` | Location dataset resource  |
//! | `ATLAS_CONFIG`           | *(none)*           | Optional TOML config file       |
//! | `ATLAS_ASSET_ROOT`       | `assets/`          | Required asset path prefix      |
//! | `ATLAS_ICON_BASE`        | `assets/icons/`    | Marker icon directory prefix    |
//! | `ATLAS_HISTORY_CAPACITY` | `5`                | Visit-history queue capacity    |

use anyhow::Result;
use atlas_engine::{
    loader,
    service::AtlasService,
    types::AtlasConfig,
    view::{AudioPlayer, DetailPresenter, IconSpec, MarkerHandle, SidebarView, Viewport},
    EntryId, Location,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "atlas-inspect", about = "Atlas dataset inspector", version)]
struct Args {
    /// Type registry resource (category id → icon/zoom)
    #[arg(long, env = "ATLAS_TYPES", default_value = "assets/types.json")]
    types: PathBuf,

    /// Location dataset resource (region → raw location records)
    #[arg(long, env = "ATLAS_LOCATIONS", default_value = "assets/locations.json")]
    locations: PathBuf,

    /// Optional TOML file overriding engine defaults
    #[arg(long, env = "ATLAS_CONFIG")]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<AtlasConfig> {
    let mut builder =
        config::Config::builder().add_source(config::Config::try_from(&AtlasConfig::default())?);
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }
    let settings = builder
        .add_source(config::Environment::with_prefix("ATLAS"))
        .build()?;
    Ok(settings.try_deserialize()?)
}

// ---------------------------------------------------------------------------
// Headless collaborators
// ---------------------------------------------------------------------------

/// There is no live map in a terminal; markers are just counted and logged.
#[derive(Default)]
struct HeadlessViewport {
    next_handle: u64,
}

impl Viewport for HeadlessViewport {
    fn create_marker(&mut self, at: (f64, f64), icon: &IconSpec) -> MarkerHandle {
        self.next_handle += 1;
        debug!("marker {} at {:?} icon {}", self.next_handle, at, icon.path);
        MarkerHandle(self.next_handle)
    }

    fn attach(&mut self, _marker: MarkerHandle) {}
    fn detach(&mut self, _marker: MarkerHandle) {}
    fn set_opacity(&mut self, _marker: MarkerHandle, _opacity: f64) {}
    fn set_highlight(&mut self, _marker: MarkerHandle, _on: bool) {}

    fn pan_to(&mut self, at: (f64, f64), zoom: f64) {
        debug!("pan to {:?} zoom {}", at, zoom);
    }
}

#[derive(Default)]
struct HeadlessSidebar;

impl SidebarView for HeadlessSidebar {
    fn set_row_visible(&mut self, _entry: EntryId, _visible: bool) {}
    fn set_row_hover(&mut self, _entry: EntryId, _on: bool) {}
    fn set_row_active(&mut self, _entry: EntryId, _on: bool) {}
    fn set_region_visible(&mut self, _region: &str, _visible: bool) {}
    fn set_region_expanded(&mut self, _region: &str, _expanded: bool) {}

    fn set_type_options(&mut self, options: &[String], _selected: &str) {
        debug!("type options: {}", options.join(", "));
    }

    fn set_history(&mut self, _trail: &[String], _back_visible: bool) {}
}

#[derive(Default)]
struct HeadlessPresenter;

impl DetailPresenter for HeadlessPresenter {
    fn present(&mut self, location: &Location) {
        debug!("presenting '{}'", location.name);
    }
}

#[derive(Default)]
struct HeadlessAudio;

impl AudioPlayer for HeadlessAudio {
    fn play(&mut self, _path: &str) {}
    fn stop(&mut self) {}
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("atlas_engine=debug".parse()?)
                .add_directive("atlas_inspect=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    info!(
        "inspecting '{}' + '{}' (asset root '{}')",
        args.types.display(),
        args.locations.display(),
        config.asset_root,
    );

    // Registry first: icon and zoom resolution depend on it.
    let (types, raw) = loader::load_bundle(&args.types, &args.locations).await?;
    let registered_types = types.len();

    let mut service = AtlasService::new(
        config,
        Box::new(HeadlessViewport::default()),
        Box::new(HeadlessSidebar::default()),
        Box::new(HeadlessPresenter::default()),
        Box::new(HeadlessAudio::default()),
    );
    let issues = service.load_dataset(types, &raw);
    let stats = service.stats();

    println!(
        "{} regions, {} locations ({} visible), {} registered types",
        stats.regions,
        stats.locations,
        stats.visible_locations,
        registered_types,
    );

    if issues.is_empty() {
        println!("validation OK");
        Ok(())
    } else {
        for issue in &issues {
            println!("issue: {issue}");
        }
        println!("{} issue(s) found", issues.len());
        std::process::exit(1);
    }
}
