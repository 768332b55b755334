//! Startup seed data.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::item::Item;
use crate::store::{MemoryStore, StoreError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid seed data: {0}")]
    Store(#[from] StoreError),
}

/// Parse a JSON array of `{id, name}` items.
pub fn parse_seed(path: &Path, contents: &str) -> Result<Vec<Item>, SeedError> {
    serde_json::from_str(contents).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the startup store, seeded from `path` when given.
pub async fn load_store(path: Option<&Path>) -> Result<MemoryStore, SeedError> {
    let Some(path) = path else {
        return Ok(MemoryStore::new());
    };

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let items = parse_seed(path, &contents)?;
    Ok(MemoryStore::with_items(items)?)
}
