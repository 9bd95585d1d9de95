//! Game-object catalog loader.

use std::path::Path;

use rando_core::{CatalogEntry, StaticCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub entries: Vec<CatalogEntry>,
}

/// Loader for the concrete game-object catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog from a RON file containing a [`CatalogFile`].
    pub fn load(path: &Path) -> LoadResult<StaticCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog from {}: {}", path.display(), e))
    }

    /// Parse a catalog from RON text.
    ///
    /// Later entries replace earlier ones with the same kind and id.
    pub fn parse(content: &str) -> LoadResult<StaticCatalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        let total = file.entries.len();
        let catalog: StaticCatalog = file.entries.into_iter().collect();
        if catalog.len() != total {
            tracing::warn!(
                "catalog has {} duplicate entries; later ones win",
                total - catalog.len()
            );
        }
        Ok(catalog)
    }
}
