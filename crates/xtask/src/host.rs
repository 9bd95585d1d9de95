//! Host that prints every manager call instead of touching a game

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use console::style;
use rando_core::{
    AbilityUnlockManager, CatalogEntry, EquipmentManager, InventoryManager, Managers,
    StatManager, WeaponUpgradeManager,
};

/// Prints effects as they are applied and remembers unlocked weapons.
///
/// Every manager slot needs its own `&mut`, so the host is split into
/// handles that share the unlocked set.
#[derive(Clone, Default)]
pub struct LoggingHost {
    unlocked: Rc<RefCell<HashSet<String>>>,
    effects: Rc<RefCell<usize>>,
}

/// One handle per manager slot.
pub struct HostHandles {
    inventory: LoggingHost,
    equipment: LoggingHost,
    upgrades: LoggingHost,
    abilities: LoggingHost,
    stats: LoggingHost,
}

impl LoggingHost {
    pub fn handles(&self) -> HostHandles {
        HostHandles {
            inventory: self.clone(),
            equipment: self.clone(),
            upgrades: self.clone(),
            abilities: self.clone(),
            stats: self.clone(),
        }
    }

    /// Number of effects applied so far.
    pub fn effects(&self) -> usize {
        *self.effects.borrow()
    }

    fn print(&self, action: &str, detail: String) {
        *self.effects.borrow_mut() += 1;
        println!("  {} {} {}", style("→").cyan(), style(action).bold(), detail);
    }
}

impl HostHandles {
    pub fn managers(&mut self) -> Managers<'_> {
        Managers::new(
            &mut self.inventory,
            &mut self.equipment,
            &mut self.upgrades,
            &mut self.abilities,
            &mut self.stats,
        )
    }
}

impl InventoryManager for LoggingHost {
    fn add_item(&mut self, entry: &CatalogEntry, quantity: u32, forced: bool) {
        self.print(
            "add item",
            format!("{} {} (quantity {quantity}, forced {forced})", entry.kind, entry.id),
        );
    }
}

impl EquipmentManager for LoggingHost {
    fn is_unlocked(&self, weapon: &CatalogEntry) -> bool {
        self.unlocked.borrow().contains(&weapon.id)
    }

    fn unlock(&mut self, weapon: &CatalogEntry) {
        self.unlocked.borrow_mut().insert(weapon.id.clone());
        self.print("unlock weapon", weapon.id.clone());
    }
}

impl WeaponUpgradeManager for LoggingHost {
    fn upgrade_tier(&mut self, weapon: &CatalogEntry) {
        self.print("upgrade weapon", weapon.id.clone());
    }
}

impl AbilityUnlockManager for LoggingHost {
    fn set_ability(&mut self, ability: &CatalogEntry, enabled: bool) {
        let action = if enabled { "enable ability" } else { "disable ability" };
        self.print(action, ability.id.clone());
    }
}

impl StatManager for LoggingHost {
    fn add_reward_currency(&mut self, amount: u32) {
        self.print("add tears", amount.to_string());
    }

    fn add_reward_orbs(&mut self, amount: u32, forced: bool) {
        self.print("add marks", format!("{amount} (forced {forced})"));
    }
}
