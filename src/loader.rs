//! Resource loading: the type registry and the raw location dataset.
//!
//! One ordering rule applies (the registry is awaited before the dataset is
//! touched, because icon and zoom resolution depend on it); beyond that,
//! failures are terminal for the load attempt only — the caller may retry by
//! invoking the load again.

use crate::types::TypeDefinition;
use log::debug;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

async fn read_resource(path: &Path) -> Result<Vec<u8>, AtlasError> {
    let bytes = fs::read(path).await.map_err(|source| AtlasError::Io {
        path: path.display().to_string(),
        source,
    })?;
    // Fingerprint gives a reproducible dataset-revision id in diagnostics.
    debug!(
        "loaded {} ({} bytes, md5 {:x})",
        path.display(),
        bytes.len(),
        md5::compute(&bytes)
    );
    Ok(bytes)
}

/// Load the category-id → definition mapping.
pub async fn load_registry(
    path: impl AsRef<Path>,
) -> Result<HashMap<String, TypeDefinition>, AtlasError> {
    let path = path.as_ref();
    let bytes = read_resource(path).await?;
    serde_json::from_slice(&bytes).map_err(|source| AtlasError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load the raw region → records mapping, untrusted and loosely typed; the
/// normalizer gives it canonical shape.
pub async fn load_raw_dataset(path: impl AsRef<Path>) -> Result<Value, AtlasError> {
    let path = path.as_ref();
    let bytes = read_resource(path).await?;
    serde_json::from_slice(&bytes).map_err(|source| AtlasError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load both resources, registry first.
pub async fn load_bundle(
    registry_path: impl AsRef<Path>,
    dataset_path: impl AsRef<Path>,
) -> Result<(HashMap<String, TypeDefinition>, Value), AtlasError> {
    let registry = load_registry(registry_path).await?;
    let dataset = load_raw_dataset(dataset_path).await?;
    Ok((registry, dataset))
}
