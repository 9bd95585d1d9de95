//! Item definitions.
//!
//! An [`Item`] is created once from static data and never mutated. Whether it
//! is atomic or progressive is decided solely by its [`Reward`]: atomic items
//! carry an [`AtomicReward`] with everything needed to apply it, progressive
//! items carry a [`Chain`] of sub-item ids.

mod amount;
mod error;
mod kind;
mod record;

pub use amount::{AmountError, parse_amount};
pub use error::ItemDataError;
pub use kind::{AtomicReward, ItemType, Reward};
pub use record::{ItemRecord, TypeTag};

use crate::chain::Chain;

/// Immutable item definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub hint: String,

    /// Declared type; `None` when the record carried an unknown tag.
    ///
    /// For progressive items this is descriptive only.
    pub item_type: Option<ItemType>,

    /// Consumed by placement logic; not interpreted here.
    pub progression: bool,

    /// Multiplicity in the item pool; not interpreted here.
    pub count: u32,

    pub reward: Reward,
}

impl Item {
    /// Creates an atomic item whose type is derived from the reward.
    pub fn atomic(id: impl Into<String>, reward: AtomicReward) -> Self {
        let item_type = match &reward {
            AtomicReward::RosaryBead => Some(ItemType::RosaryBead),
            AtomicReward::Prayer => Some(ItemType::Prayer),
            AtomicReward::Figurine => Some(ItemType::Figurine),
            AtomicReward::QuestItem => Some(ItemType::QuestItem),
            AtomicReward::Weapon => Some(ItemType::Weapon),
            AtomicReward::Ability => Some(ItemType::Ability),
            AtomicReward::Tears { .. } => Some(ItemType::Tears),
            AtomicReward::Marks { .. } => Some(ItemType::Marks),
            AtomicReward::Unrecognized { .. } => None,
        };
        Self::with_reward(id, item_type, Reward::Atomic(reward))
    }

    /// Creates a progressive item over `chain`.
    pub fn progressive(id: impl Into<String>, item_type: ItemType, chain: Chain) -> Self {
        Self::with_reward(id, Some(item_type), Reward::Progressive(chain))
    }

    fn with_reward(id: impl Into<String>, item_type: Option<ItemType>, reward: Reward) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            hint: String::new(),
            item_type,
            progression: false,
            count: 1,
            reward,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    #[must_use]
    pub fn with_progression(mut self, progression: bool) -> Self {
        self.progression = progression;
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn is_progressive(&self) -> bool {
        matches!(self.reward, Reward::Progressive(_))
    }

    /// Returns the sub-item chain of a progressive item.
    pub fn chain(&self) -> Option<&Chain> {
        self.reward.as_chain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_derives_type_from_reward() {
        let item = Item::atomic("MK[5]", AtomicReward::Marks { amount: 5 }).with_name("Marks");
        assert_eq!(item.item_type, Some(ItemType::Marks));
        assert_eq!(item.name, "Marks");
        assert!(!item.is_progressive());
        assert!(item.chain().is_none());
    }

    #[test]
    fn progressive_exposes_chain() {
        let chain = Chain::new(["W1", "W2"]).unwrap();
        let item = Item::progressive("PW", ItemType::Weapon, chain.clone()).with_count(2);
        assert!(item.is_progressive());
        assert_eq!(item.chain(), Some(&chain));
        assert_eq!(item.count, 2);
    }

    #[test]
    fn record_round_trip_keeps_sub_items() {
        let chain = Chain::new(["QI70", "QI71"]).unwrap();
        let item = Item::progressive("PQ", ItemType::QuestItem, chain).with_progression(true);
        let record = ItemRecord::from(&item);
        assert_eq!(record.sub_items, Some(vec!["QI70".into(), "QI71".into()]));
        assert_eq!(Item::try_from(record).unwrap(), item);
    }
}
