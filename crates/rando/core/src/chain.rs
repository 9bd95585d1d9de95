//! Progressive chain resolution.
//!
//! A chain is an ordered list of sub-item ids. Its position is the number of
//! leading sub-items marked collected in the ledger, scanned left to right and
//! stopping at the first uncollected id. Out-of-order collection is assumed
//! not to happen and is not validated.
//!
//! Position is recomputed from the ledger on every query. There is no cached
//! tier to fall out of sync with the ledger.

use crate::env::ItemOracle;
use crate::item::Item;
use crate::ledger::CollectionLedger;

/// Ordered, non-empty sequence of sub-item ids. Index 0 is the first tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    sub_items: Vec<String>,
}

impl Chain {
    /// Builds a chain, or `None` when `sub_items` is empty.
    pub fn new<I, S>(sub_items: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sub_items: Vec<String> = sub_items.into_iter().map(Into::into).collect();
        if sub_items.is_empty() {
            return None;
        }
        Some(Self { sub_items })
    }

    pub fn sub_items(&self) -> &[String] {
        &self.sub_items
    }

    pub fn len(&self) -> usize {
        self.sub_items.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sub_items.is_empty()
    }

    /// Count of leading collected sub-items.
    pub fn level<L>(&self, ledger: &L) -> usize
    where
        L: CollectionLedger + ?Sized,
    {
        self.sub_items
            .iter()
            .take_while(|id| ledger.is_collected(id))
            .count()
    }

    pub fn position<L>(&self, ledger: &L) -> ChainPosition
    where
        L: CollectionLedger + ?Sized,
    {
        ChainPosition {
            level: self.level(ledger),
            len: self.len(),
        }
    }

    /// Id of the highest tier currently held.
    pub fn current_id<L>(&self, ledger: &L) -> Option<&str>
    where
        L: CollectionLedger + ?Sized,
    {
        self.position(ledger)
            .current_index()
            .map(|index| self.sub_items[index].as_str())
    }

    /// Id of the tier the next grant applies.
    pub fn upgraded_id<L>(&self, ledger: &L) -> Option<&str>
    where
        L: CollectionLedger + ?Sized,
    {
        self.position(ledger)
            .upgraded_index()
            .map(|index| self.sub_items[index].as_str())
    }

    /// Resolves the current member through the item registry.
    ///
    /// `owner` is the id of the progressive item, used for diagnostics.
    pub fn current_member<'a, I, L>(&self, owner: &str, items: &'a I, ledger: &L) -> Option<&'a Item>
    where
        I: ItemOracle + ?Sized,
        L: CollectionLedger + ?Sized,
    {
        let Some(id) = self.current_id(ledger) else {
            tracing::error!(
                "'{}': trying to access current sub-item that hasn't been collected yet",
                owner
            );
            return None;
        };
        lookup(owner, id, items)
    }

    /// Resolves the next-to-grant member through the item registry.
    pub fn upgraded_member<'a, I, L>(
        &self,
        owner: &str,
        items: &'a I,
        ledger: &L,
    ) -> Option<&'a Item>
    where
        I: ItemOracle + ?Sized,
        L: CollectionLedger + ?Sized,
    {
        let Some(id) = self.upgraded_id(ledger) else {
            tracing::error!(
                "'{}': trying to access upgraded sub-item that is already fully collected",
                owner
            );
            return None;
        };
        lookup(owner, id, items)
    }
}

fn lookup<'a, I>(owner: &str, id: &str, items: &'a I) -> Option<&'a Item>
where
    I: ItemOracle + ?Sized,
{
    let item = items.item(id);
    if item.is_none() {
        tracing::error!("'{}': sub-item '{}' is not a known item", owner, id);
    }
    item
}

/// Snapshot of a chain's position against one ledger state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainPosition {
    /// Leading collected sub-items.
    pub level: usize,
    pub len: usize,
}

impl ChainPosition {
    /// Index of the current member; `None` before the first tier is collected.
    pub fn current_index(&self) -> Option<usize> {
        self.level.checked_sub(1)
    }

    /// Index of the next member; `None` once every tier is collected.
    pub fn upgraded_index(&self) -> Option<usize> {
        (self.level < self.len).then_some(self.level)
    }

    pub fn is_started(&self) -> bool {
        self.level > 0
    }

    pub fn is_exhausted(&self) -> bool {
        self.level >= self.len
    }
}
