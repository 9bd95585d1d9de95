//! Data-driven reward content and loaders.
//!
//! This crate reads the static data the reward engine runs on:
//! - Item definitions (JSON item records)
//! - Concrete game-object catalogs (RON)
//! - Reward configuration (TOML)
//!
//! Content is converted into `rando-core` values at load time and is never
//! mutated afterwards. Malformed data fails here, before any grant runs.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogLoader, ConfigLoader, ContentFactory, ItemLoader, LoadResult, bundled_catalog,
    bundled_registry,
};
