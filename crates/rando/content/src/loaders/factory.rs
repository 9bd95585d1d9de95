//! Content factory for building reward data from a data directory.

use std::path::{Path, PathBuf};

use rando_core::{Item, ItemRegistry, RewardConfig, StaticCatalog};

use crate::loaders::{CatalogLoader, ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads all reward content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── items.json
/// └── catalog.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load reward configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<RewardConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!("{} not found; using default config", path.display());
            return Ok(RewardConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item definitions from `items.json`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        let path = self.data_dir.join("items.json");
        ItemLoader::load(&path)
    }

    /// Load and validate the item registry from `items.json`.
    pub fn load_registry(&self) -> LoadResult<ItemRegistry> {
        let path = self.data_dir.join("items.json");
        ItemLoader::load_registry(&path)
    }

    /// Load the game-object catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<StaticCatalog> {
        let path = self.data_dir.join("catalog.ron");
        CatalogLoader::load(&path)
    }
}
