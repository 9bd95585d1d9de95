use std::collections::{BTreeMap, HashMap};

use super::RegistryError;
use crate::item::Item;

/// Item definitions by id. Chains dereference their sub-item ids through it.
pub trait ItemOracle {
    fn item(&self, id: &str) -> Option<&Item>;
}

/// Validated set of item definitions.
///
/// Construction guarantees unique ids, resolvable sub-item references, and
/// acyclic chains, so chain delegation always terminates.
#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    items: BTreeMap<String, Item>,
}

impl ItemRegistry {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Result<Self, RegistryError> {
        let mut by_id = BTreeMap::new();
        for item in items {
            if by_id.contains_key(&item.id) {
                return Err(RegistryError::DuplicateItem { id: item.id });
            }
            by_id.insert(item.id.clone(), item);
        }

        for item in by_id.values() {
            let Some(chain) = item.chain() else {
                continue;
            };
            if let Some(missing) = chain.sub_items().iter().find(|id| !by_id.contains_key(*id)) {
                return Err(RegistryError::UnknownSubItem {
                    parent: item.id.clone(),
                    sub_item: missing.clone(),
                });
            }
        }

        check_acyclic(&by_id)?;
        Ok(Self { items: by_id })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.values()
    }

    /// Iterates progressive items in id order.
    pub fn progressive(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.values().filter(|item| item.is_progressive())
    }
}

impl ItemOracle for ItemRegistry {
    fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

fn check_acyclic(items: &BTreeMap<String, Item>) -> Result<(), RegistryError> {
    fn visit<'a>(
        id: &'a str,
        items: &'a BTreeMap<String, Item>,
        visits: &mut HashMap<&'a str, Visit>,
    ) -> Result<(), RegistryError> {
        match visits.get(id) {
            Some(Visit::Done) => return Ok(()),
            Some(Visit::InProgress) => {
                return Err(RegistryError::ChainCycle { id: id.to_owned() });
            }
            None => {}
        }

        visits.insert(id, Visit::InProgress);
        if let Some(chain) = items.get(id).and_then(Item::chain) {
            for sub_item in chain.sub_items() {
                visit(sub_item, items, visits)?;
            }
        }
        visits.insert(id, Visit::Done);
        Ok(())
    }

    let mut visits = HashMap::new();
    for id in items.keys() {
        visit(id, items, &mut visits)?;
    }
    Ok(())
}
