//! Traits describing read-only reward data.
//!
//! Oracles expose the concrete game-object catalogs and the item registry.
//! The [`Env`] aggregate bundles them with the [`RewardConfig`] so the reward
//! engine can reach everything it reads without coupling to implementations.
mod catalog;
mod error;
mod items;

pub use catalog::{CatalogEntry, CatalogKind, CatalogOracle, ImageId, StaticCatalog};
pub use error::RegistryError;
pub use items::{ItemOracle, ItemRegistry};

use crate::config::RewardConfig;

/// Aggregates the read-only oracles required by reward resolution.
pub struct Env<'a, C: ?Sized, I: ?Sized> {
    catalog: &'a C,
    items: &'a I,
    config: &'a RewardConfig,
}

pub type RewardEnv<'a> = Env<'a, dyn CatalogOracle + 'a, dyn ItemOracle + 'a>;

impl<C: ?Sized, I: ?Sized> Clone for Env<'_, C, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, I: ?Sized> Copy for Env<'_, C, I> {}

impl<'a, C, I> Env<'a, C, I>
where
    C: CatalogOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    pub fn new(catalog: &'a C, items: &'a I, config: &'a RewardConfig) -> Self {
        Self {
            catalog,
            items,
            config,
        }
    }

    pub fn catalog(&self) -> &'a C {
        self.catalog
    }

    pub fn items(&self) -> &'a I {
        self.items
    }

    pub fn config(&self) -> &'a RewardConfig {
        self.config
    }
}

impl<'a, C, I> Env<'a, C, I>
where
    C: CatalogOracle + 'a,
    I: ItemOracle + 'a,
{
    /// Converts this environment into a trait-object based `RewardEnv`.
    pub fn into_reward_env(self) -> RewardEnv<'a> {
        let catalog: &'a dyn CatalogOracle = self.catalog;
        let items: &'a dyn ItemOracle = self.items;
        Env::new(catalog, items, self.config)
    }
}
