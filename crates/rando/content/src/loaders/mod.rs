//! Content loaders for reading reward data from files.
//!
//! Each loader converts one file format into `rando-core` values.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod item;

pub use catalog::{CatalogFile, CatalogLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;

use std::path::Path;

use rando_core::{ItemRegistry, StaticCatalog};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Item registry built from the item data compiled into this crate.
pub fn bundled_registry() -> LoadResult<ItemRegistry> {
    ItemLoader::parse_registry(include_str!("../../data/items.json"))
}

/// Catalog built from the catalog data compiled into this crate.
pub fn bundled_catalog() -> LoadResult<StaticCatalog> {
    CatalogLoader::parse(include_str!("../../data/catalog.ron"))
}
