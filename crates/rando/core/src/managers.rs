//! Game-side collaborators that apply reward effects.
//!
//! The host implements these against its own inventory, equipment and stat
//! systems. Tests substitute recording doubles.

use crate::env::CatalogEntry;

pub trait InventoryManager {
    /// Adds `entry` to the player inventory.
    ///
    /// A `quantity` of 0 asks for the default quantity. `forced` bypasses
    /// acquisition gating such as capacity checks.
    fn add_item(&mut self, entry: &CatalogEntry, quantity: u32, forced: bool);
}

pub trait EquipmentManager {
    fn is_unlocked(&self, weapon: &CatalogEntry) -> bool;
    fn unlock(&mut self, weapon: &CatalogEntry);
}

pub trait WeaponUpgradeManager {
    /// Raises the power tier of an already unlocked weapon by one step.
    fn upgrade_tier(&mut self, weapon: &CatalogEntry);
}

pub trait AbilityUnlockManager {
    fn set_ability(&mut self, ability: &CatalogEntry, enabled: bool);
}

pub trait StatManager {
    /// Adds reward-sourced currency, tracked apart from currency earned in play.
    fn add_reward_currency(&mut self, amount: u32);
    fn add_reward_orbs(&mut self, amount: u32, forced: bool);
}

/// Mutable borrows of every manager a grant may touch.
pub struct Managers<'a> {
    pub inventory: &'a mut dyn InventoryManager,
    pub equipment: &'a mut dyn EquipmentManager,
    pub upgrades: &'a mut dyn WeaponUpgradeManager,
    pub abilities: &'a mut dyn AbilityUnlockManager,
    pub stats: &'a mut dyn StatManager,
}

impl<'a> Managers<'a> {
    pub fn new(
        inventory: &'a mut dyn InventoryManager,
        equipment: &'a mut dyn EquipmentManager,
        upgrades: &'a mut dyn WeaponUpgradeManager,
        abilities: &'a mut dyn AbilityUnlockManager,
        stats: &'a mut dyn StatManager,
    ) -> Self {
        Self {
            inventory,
            equipment,
            upgrades,
            abilities,
            stats,
        }
    }
}
