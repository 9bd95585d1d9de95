//! Display image resolution.
//!
//! Progressive items show the image of a chain member: the current member for
//! "what is held" and the upgraded member for "what the next grant gives".
//! Atomic items show their catalog image. Weapons, abilities and Tears have
//! none, and every Marks item shares one orb image.

use crate::env::{CatalogKind, CatalogOracle, Env, ImageId, ItemOracle};
use crate::item::{AtomicReward, Item, Reward};
use crate::ledger::CollectionLedger;

/// Image of what `item` currently represents.
pub fn current_image<C, I, L>(item: &Item, env: &Env<'_, C, I>, ledger: &L) -> Option<ImageId>
where
    C: CatalogOracle + ?Sized,
    I: ItemOracle + ?Sized,
    L: CollectionLedger + ?Sized,
{
    match &item.reward {
        Reward::Progressive(chain) => {
            let member = chain.current_member(&item.id, env.items(), ledger)?;
            current_image(member, env, ledger)
        }
        Reward::Atomic(reward) => atomic_image(&item.id, reward, env),
    }
}

/// Image of what granting `item` next would give.
pub fn upgraded_image<C, I, L>(item: &Item, env: &Env<'_, C, I>, ledger: &L) -> Option<ImageId>
where
    C: CatalogOracle + ?Sized,
    I: ItemOracle + ?Sized,
    L: CollectionLedger + ?Sized,
{
    match &item.reward {
        Reward::Progressive(chain) => {
            let member = chain.upgraded_member(&item.id, env.items(), ledger)?;
            current_image(member, env, ledger)
        }
        Reward::Atomic(_) => current_image(item, env, ledger),
    }
}

fn atomic_image<C, I>(id: &str, reward: &AtomicReward, env: &Env<'_, C, I>) -> Option<ImageId>
where
    C: CatalogOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    let (kind, lookup_id) = match reward {
        AtomicReward::RosaryBead
        | AtomicReward::Prayer
        | AtomicReward::Figurine
        | AtomicReward::QuestItem => (reward.catalog_kind()?, id),
        AtomicReward::Marks { .. } => (CatalogKind::QuestItem, env.config().marks_image_id.as_str()),
        AtomicReward::Weapon
        | AtomicReward::Ability
        | AtomicReward::Tears { .. }
        | AtomicReward::Unrecognized { .. } => return None,
    };

    let entry = env.catalog().try_get(kind, lookup_id);
    if entry.is_none() {
        tracing::debug!("no {} '{}' in catalog for image of '{}'", kind, lookup_id, id);
    }
    entry.and_then(|entry| entry.image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Chain;
    use crate::config::RewardConfig;
    use crate::env::{CatalogEntry, ItemRegistry, StaticCatalog};
    use crate::item::ItemType;
    use crate::ledger::MemoryLedger;

    fn catalog() -> StaticCatalog {
        [
            CatalogEntry::new(CatalogKind::RosaryBead, "RB01").with_image("bead_01"),
            CatalogEntry::new(CatalogKind::QuestItem, "QI70").with_image("key_1"),
            CatalogEntry::new(CatalogKind::QuestItem, "QI71").with_image("key_2"),
            CatalogEntry::new(CatalogKind::QuestItem, "QI99").with_image("marks_orb"),
            CatalogEntry::new(CatalogKind::Weapon, "WE01").with_image("censer"),
        ]
        .into_iter()
        .collect()
    }

    fn registry() -> ItemRegistry {
        ItemRegistry::new(vec![
            Item::atomic("RB01", AtomicReward::RosaryBead),
            Item::atomic("QI70", AtomicReward::QuestItem),
            Item::atomic("QI71", AtomicReward::QuestItem),
            Item::atomic("WE01", AtomicReward::Weapon),
            Item::atomic("TR[30]", AtomicReward::Tears { amount: 30 }),
            Item::atomic("MK[5]", AtomicReward::Marks { amount: 5 }),
            Item::atomic("MK[12]", AtomicReward::Marks { amount: 12 }),
            Item::progressive("PK", ItemType::QuestItem, Chain::new(["QI70", "QI71"]).unwrap()),
        ])
        .unwrap()
    }

    fn image_of(id: &str, ledger: &MemoryLedger) -> (Option<ImageId>, Option<ImageId>) {
        let catalog = catalog();
        let items = registry();
        let config = RewardConfig::default();
        let env = Env::new(&catalog, &items, &config);
        let item = items.item(id).unwrap();
        (
            current_image(item, &env, ledger),
            upgraded_image(item, &env, ledger),
        )
    }

    #[test]
    fn atomic_catalog_images() {
        let ledger = MemoryLedger::new();
        assert_eq!(image_of("RB01", &ledger).0, Some(ImageId::new("bead_01")));
        // Weapons have a catalog image but never display it.
        assert_eq!(image_of("WE01", &ledger), (None, None));
        assert_eq!(image_of("TR[30]", &ledger), (None, None));
    }

    #[test]
    fn marks_share_the_orb_image() {
        let ledger = MemoryLedger::new();
        let orb = Some(ImageId::new("marks_orb"));
        assert_eq!(image_of("MK[5]", &ledger), (orb.clone(), orb.clone()));
        assert_eq!(image_of("MK[12]", &ledger).0, orb);
    }

    #[test]
    fn chain_images_follow_ledger() {
        let mut ledger = MemoryLedger::new();
        assert_eq!(image_of("PK", &ledger), (None, Some(ImageId::new("key_1"))));

        ledger.set_collected("QI70");
        assert_eq!(
            image_of("PK", &ledger),
            (Some(ImageId::new("key_1")), Some(ImageId::new("key_2")))
        );

        ledger.set_collected("QI71");
        assert_eq!(image_of("PK", &ledger), (Some(ImageId::new("key_2")), None));
    }

    #[test]
    fn resolution_is_repeatable() {
        let ledger: MemoryLedger = ["QI70"].into_iter().collect();
        assert_eq!(image_of("PK", &ledger), image_of("PK", &ledger));
    }
}
