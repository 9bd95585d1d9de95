//! Collection ledger: which item ids have been granted this session.
//!
//! The ledger is the only mutable state the reward engine touches. Chain
//! position is derived from it on every access, so it must be the single
//! source of truth for what was collected.

use std::collections::BTreeSet;

/// Per-id collected flags, keyed by item identifier.
pub trait CollectionLedger {
    fn is_collected(&self, id: &str) -> bool;

    /// Marks `id` collected. Marking an already collected id has no effect.
    fn set_collected(&mut self, id: &str);
}

/// In-memory ledger backed by a sorted id set.
///
/// Serializes as a plain sorted list of collected ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MemoryLedger {
    collected: BTreeSet<String>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every entry, as when a new session starts.
    pub fn reset(&mut self) {
        self.collected.clear();
    }

    pub fn len(&self) -> usize {
        self.collected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }

    /// Iterates collected ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.collected.iter().map(String::as_str)
    }
}

impl CollectionLedger for MemoryLedger {
    fn is_collected(&self, id: &str) -> bool {
        self.collected.contains(id)
    }

    fn set_collected(&mut self, id: &str) {
        if !self.collected.contains(id) {
            tracing::debug!("marking '{}' collected", id);
            self.collected.insert(id.to_owned());
        }
    }
}

impl<S: Into<String>> FromIterator<S> for MemoryLedger {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            collected: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_collected_is_idempotent() {
        let mut once = MemoryLedger::new();
        once.set_collected("RB01");

        let mut twice = MemoryLedger::new();
        twice.set_collected("RB01");
        twice.set_collected("RB01");

        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
        assert!(twice.is_collected("RB01"));
        assert!(!twice.is_collected("RB02"));
    }

    #[test]
    fn reset_starts_a_new_session() {
        let mut ledger: MemoryLedger = ["W1", "W2"].into_iter().collect();
        assert_eq!(ledger.iter().collect::<Vec<_>>(), vec!["W1", "W2"]);

        ledger.reset();
        assert!(ledger.is_empty());
        assert!(!ledger.is_collected("W1"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_sorted_list() {
        let ledger: MemoryLedger = ["QI02", "AB10", "QI01"].into_iter().collect();
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"["AB10","QI01","QI02"]"#);
        assert_eq!(serde_json::from_str::<MemoryLedger>(&json).unwrap(), ledger);
    }
}
