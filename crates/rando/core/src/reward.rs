//! Reward granting.
//!
//! The [`RewardEngine`] is the only writer of the collection ledger. A grant
//! always runs to completion and never reports failure to the caller: catalog
//! misses and exhausted chains are logged and absorbed.

use crate::env::{CatalogEntry, CatalogKind, CatalogOracle, ImageId, ItemOracle, RewardEnv};
use crate::image;
use crate::item::{AtomicReward, Item, Reward};
use crate::ledger::CollectionLedger;
use crate::managers::Managers;

/// Quantity passed to the inventory meaning "use the default quantity".
const DEFAULT_QUANTITY: u32 = 0;

/// Applies item rewards to the game and records them in the ledger.
pub struct RewardEngine<'a> {
    env: RewardEnv<'a>,
    ledger: &'a mut dyn CollectionLedger,
    managers: Managers<'a>,
}

impl<'a> RewardEngine<'a> {
    pub fn new(
        env: RewardEnv<'a>,
        ledger: &'a mut dyn CollectionLedger,
        managers: Managers<'a>,
    ) -> Self {
        Self {
            env,
            ledger,
            managers,
        }
    }

    /// Grants `item` and marks it collected.
    ///
    /// Progressive items grant their next uncollected tier through the same
    /// path, so the tier's id is marked before the progressive id is. An
    /// exhausted chain grants and marks nothing.
    ///
    /// Atomic items are marked collected even when the catalog lookup misses
    /// or the type is unrecognized, so a reload never re-offers them.
    pub fn grant(&mut self, item: &Item) {
        match &item.reward {
            Reward::Progressive(chain) => {
                let items = self.env.items();
                let Some(tier) = chain.upgraded_member(&item.id, items, &*self.ledger) else {
                    return;
                };
                tracing::debug!("'{}': granting tier '{}'", item.id, tier.id);
                self.grant(tier);
            }
            Reward::Atomic(reward) => self.apply(&item.id, reward),
        }

        self.ledger.set_collected(&item.id);
    }

    /// Looks `id` up in the item registry and grants it.
    pub fn grant_id(&mut self, id: &str) {
        match self.env.items().item(id) {
            Some(item) => self.grant(item),
            None => tracing::error!("cannot grant unknown item '{}'", id),
        }
    }

    pub fn current_image(&self, item: &Item) -> Option<ImageId> {
        image::current_image(item, &self.env, &*self.ledger)
    }

    pub fn upgraded_image(&self, item: &Item) -> Option<ImageId> {
        image::upgraded_image(item, &self.env, &*self.ledger)
    }

    pub fn ledger(&self) -> &dyn CollectionLedger {
        &*self.ledger
    }

    fn apply(&mut self, id: &str, reward: &AtomicReward) {
        match reward {
            AtomicReward::RosaryBead
            | AtomicReward::Prayer
            | AtomicReward::Figurine
            | AtomicReward::QuestItem => {
                let Some(kind) = reward.catalog_kind() else {
                    return;
                };
                if let Some(entry) = self.lookup(kind, id) {
                    tracing::debug!("adding {} '{}' to inventory", kind, id);
                    self.managers
                        .inventory
                        .add_item(&entry, DEFAULT_QUANTITY, true);
                }
            }
            AtomicReward::Weapon => {
                let Some(weapon) = self.lookup(CatalogKind::Weapon, id) else {
                    return;
                };
                if self.managers.equipment.is_unlocked(&weapon) {
                    tracing::debug!("upgrading weapon '{}'", id);
                    self.managers.upgrades.upgrade_tier(&weapon);
                } else {
                    tracing::debug!("unlocking weapon '{}' with weapon switching", id);
                    self.managers.equipment.unlock(&weapon);
                    let switch_id = self.env.config().switch_ability_id.as_str();
                    if let Some(ability) = self.lookup(CatalogKind::Ability, switch_id) {
                        self.managers.abilities.set_ability(&ability, true);
                    }
                }
            }
            AtomicReward::Ability => {
                if let Some(ability) = self.lookup(CatalogKind::Ability, id) {
                    tracing::debug!("enabling ability '{}'", id);
                    self.managers.abilities.set_ability(&ability, true);
                }
            }
            AtomicReward::Tears { amount } => {
                tracing::debug!("adding {} reward tears", amount);
                self.managers.stats.add_reward_currency(*amount);
            }
            AtomicReward::Marks { amount } => {
                tracing::debug!("adding {} reward marks", amount);
                self.managers.stats.add_reward_orbs(*amount, true);
            }
            AtomicReward::Unrecognized { tag } => {
                tracing::warn!("'{}' has unrecognized type '{}'; no reward applied", id, tag);
            }
        }
    }

    fn lookup(&self, kind: CatalogKind, id: &str) -> Option<CatalogEntry> {
        let entry = self.env.catalog().try_get(kind, id);
        if entry.is_none() {
            tracing::warn!("{} '{}' is missing from the catalog; reward skipped", kind, id);
        }
        entry
    }
}
