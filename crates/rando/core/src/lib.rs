//! Item reward resolution for the randomizer.
//!
//! `rando-core` maps abstract item ids to in-game effects and keeps the
//! collection ledger consistent across repeated or out-of-order grants.
//! Progressive items walk an ordered chain of sub-items whose position is
//! derived from the ledger on every access.
//!
//! All grants flow through [`reward::RewardEngine`]. Game-side effects are
//! applied through the collaborator traits in [`managers`], and read-only data
//! is reached through the oracles in [`env`].
pub mod chain;
pub mod config;
pub mod env;
pub mod error;
pub mod image;
pub mod item;
pub mod ledger;
pub mod managers;
pub mod reward;

pub use chain::{Chain, ChainPosition};
pub use config::RewardConfig;
pub use env::{
    CatalogEntry, CatalogKind, CatalogOracle, Env, ImageId, ItemOracle, ItemRegistry,
    RegistryError, RewardEnv, StaticCatalog,
};
pub use error::{ErrorSeverity, RandoError};
pub use image::{current_image, upgraded_image};
pub use item::{
    AmountError, AtomicReward, Item, ItemDataError, ItemRecord, ItemType, Reward, TypeTag,
    parse_amount,
};
pub use ledger::{CollectionLedger, MemoryLedger};
pub use managers::{
    AbilityUnlockManager, EquipmentManager, InventoryManager, Managers, StatManager,
    WeaponUpgradeManager,
};
pub use reward::RewardEngine;
