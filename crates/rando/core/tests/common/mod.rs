//! Shared fixtures: a small item set and a host that records manager calls.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use rando_core::{
    AbilityUnlockManager, AtomicReward, CatalogEntry, CatalogKind, Chain, Env, EquipmentManager,
    ImageId, InventoryManager, Item, ItemOracle, ItemRegistry, ItemType, Managers, MemoryLedger,
    RewardConfig, RewardEngine, StatManager, StaticCatalog, WeaponUpgradeManager,
};

/// One observable side effect of a grant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    AddItem {
        id: String,
        quantity: u32,
        forced: bool,
    },
    Unlock(String),
    UpgradeTier(String),
    SetAbility {
        id: String,
        enabled: bool,
    },
    RewardCurrency(u32),
    RewardOrbs {
        amount: u32,
        forced: bool,
    },
}

/// Records every manager call into a shared journal.
///
/// Clones share state, so one clone can stand in for each manager.
#[derive(Clone, Default)]
pub struct FakeHost {
    journal: Rc<RefCell<Vec<Call>>>,
    unlocked: Rc<RefCell<HashSet<String>>>,
}

impl FakeHost {
    fn record(&self, call: Call) {
        self.journal.borrow_mut().push(call);
    }
}

impl InventoryManager for FakeHost {
    fn add_item(&mut self, entry: &CatalogEntry, quantity: u32, forced: bool) {
        self.record(Call::AddItem {
            id: entry.id.clone(),
            quantity,
            forced,
        });
    }
}

impl EquipmentManager for FakeHost {
    fn is_unlocked(&self, weapon: &CatalogEntry) -> bool {
        self.unlocked.borrow().contains(&weapon.id)
    }

    fn unlock(&mut self, weapon: &CatalogEntry) {
        self.unlocked.borrow_mut().insert(weapon.id.clone());
        self.record(Call::Unlock(weapon.id.clone()));
    }
}

impl WeaponUpgradeManager for FakeHost {
    fn upgrade_tier(&mut self, weapon: &CatalogEntry) {
        self.record(Call::UpgradeTier(weapon.id.clone()));
    }
}

impl AbilityUnlockManager for FakeHost {
    fn set_ability(&mut self, ability: &CatalogEntry, enabled: bool) {
        self.record(Call::SetAbility {
            id: ability.id.clone(),
            enabled,
        });
    }
}

impl StatManager for FakeHost {
    fn add_reward_currency(&mut self, amount: u32) {
        self.record(Call::RewardCurrency(amount));
    }

    fn add_reward_orbs(&mut self, amount: u32, forced: bool) {
        self.record(Call::RewardOrbs { amount, forced });
    }
}

/// Catalog, registry, ledger and host wired together.
pub struct World {
    pub catalog: StaticCatalog,
    pub items: ItemRegistry,
    pub config: RewardConfig,
    pub ledger: MemoryLedger,
    pub host: FakeHost,
}

impl World {
    pub fn new() -> Self {
        Self::with_catalog(catalog())
    }

    pub fn with_catalog(catalog: StaticCatalog) -> Self {
        Self {
            catalog,
            items: registry(),
            config: RewardConfig::default(),
            ledger: MemoryLedger::new(),
            host: FakeHost::default(),
        }
    }

    /// Grants the registered item `id` through a fresh engine.
    pub fn grant(&mut self, id: &str) {
        let mut inventory = self.host.clone();
        let mut equipment = self.host.clone();
        let mut upgrades = self.host.clone();
        let mut abilities = self.host.clone();
        let mut stats = self.host.clone();
        let managers = Managers::new(
            &mut inventory,
            &mut equipment,
            &mut upgrades,
            &mut abilities,
            &mut stats,
        );

        let env = Env::new(&self.catalog, &self.items, &self.config).into_reward_env();
        let mut engine = RewardEngine::new(env, &mut self.ledger, managers);
        engine.grant_id(id);
    }

    /// Returns and clears the calls recorded so far.
    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.host.journal.borrow_mut())
    }

    pub fn collected(&self) -> Vec<&str> {
        self.ledger.iter().collect()
    }

    pub fn item(&self, id: &str) -> &Item {
        self.items.item(id).expect("fixture item")
    }

    pub fn images(&self, id: &str) -> (Option<ImageId>, Option<ImageId>) {
        let env = Env::new(&self.catalog, &self.items, &self.config);
        let item = self.item(id);
        (
            rando_core::current_image(item, &env, &self.ledger),
            rando_core::upgraded_image(item, &env, &self.ledger),
        )
    }
}

pub fn catalog() -> StaticCatalog {
    [
        CatalogEntry::new(CatalogKind::RosaryBead, "RB01").with_image("bead_01"),
        CatalogEntry::new(CatalogKind::Prayer, "PR01").with_image("prayer_01"),
        CatalogEntry::new(CatalogKind::Figurine, "FG01").with_image("figure_01"),
        CatalogEntry::new(CatalogKind::QuestItem, "QI01").with_image("quest_01"),
        CatalogEntry::new(CatalogKind::QuestItem, "QI70").with_image("key_1"),
        CatalogEntry::new(CatalogKind::QuestItem, "QI71").with_image("key_2"),
        CatalogEntry::new(CatalogKind::QuestItem, "QI72").with_image("key_3"),
        CatalogEntry::new(CatalogKind::QuestItem, "QI99").with_image("marks_orb"),
        CatalogEntry::new(CatalogKind::Weapon, "WE01"),
        CatalogEntry::new(CatalogKind::Weapon, "W1"),
        CatalogEntry::new(CatalogKind::Weapon, "W2"),
        CatalogEntry::new(CatalogKind::Weapon, "W3"),
        CatalogEntry::new(CatalogKind::Ability, "AB01"),
        CatalogEntry::new(CatalogKind::Ability, "AB10"),
    ]
    .into_iter()
    .collect()
}

pub fn registry() -> ItemRegistry {
    let chain = |ids: &[&str]| Chain::new(ids.iter().copied()).expect("non-empty chain");
    ItemRegistry::new(vec![
        Item::atomic("RB01", AtomicReward::RosaryBead),
        Item::atomic("RB99", AtomicReward::RosaryBead),
        Item::atomic("PR01", AtomicReward::Prayer),
        Item::atomic("FG01", AtomicReward::Figurine),
        Item::atomic("QI01", AtomicReward::QuestItem),
        Item::atomic("QI70", AtomicReward::QuestItem),
        Item::atomic("QI71", AtomicReward::QuestItem),
        Item::atomic("QI72", AtomicReward::QuestItem),
        Item::atomic("WE01", AtomicReward::Weapon),
        Item::atomic("W1", AtomicReward::Weapon),
        Item::atomic("W2", AtomicReward::Weapon),
        Item::atomic("W3", AtomicReward::Weapon),
        Item::atomic("AB01", AtomicReward::Ability),
        Item::atomic("TR[30]", AtomicReward::Tears { amount: 30 }),
        Item::atomic("MK[5]", AtomicReward::Marks { amount: 5 }),
        Item::atomic("MK[15]", AtomicReward::Marks { amount: 15 }),
        Item::atomic("XX01", AtomicReward::Unrecognized { tag: "Relic".into() }),
        Item::progressive("PW", ItemType::Weapon, chain(&["W1", "W2", "W3"])),
        Item::progressive("PK", ItemType::QuestItem, chain(&["QI70", "QI71", "QI72"])),
        Item::progressive("PT", ItemType::Tears, chain(&["TR[30]"])),
        Item::progressive("PN", ItemType::QuestItem, chain(&["PT", "QI01"])),
    ])
    .expect("fixture registry is consistent")
}
