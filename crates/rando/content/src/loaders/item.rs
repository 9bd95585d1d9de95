//! Item definition loader.

use std::path::Path;

use rando_core::{Item, ItemRecord, ItemRegistry, RandoError};

use crate::loaders::{LoadResult, read_file};

/// Loader for item definitions from JSON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item definitions from a JSON file.
    ///
    /// The file holds an array of item records. Tears and Marks amounts are
    /// parsed here, so a malformed id fails the whole load.
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load items from {}: {}", path.display(), e))
    }

    /// Load item definitions and validate them into a registry.
    pub fn load_registry(path: &Path) -> LoadResult<ItemRegistry> {
        let items = Self::load(path)?;
        Self::build_registry(items)
    }

    /// Parse item definitions from JSON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Item>> {
        let records: Vec<ItemRecord> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item JSON: {}", e))?;

        records
            .into_iter()
            .map(|record| {
                Item::try_from(record).map_err(|e| {
                    anyhow::anyhow!("[{}] {} ({})", e.error_code(), e, e.severity().as_str())
                })
            })
            .collect()
    }

    /// Parse item definitions from JSON text and validate them into a registry.
    pub fn parse_registry(content: &str) -> LoadResult<ItemRegistry> {
        Self::build_registry(Self::parse(content)?)
    }

    fn build_registry(items: Vec<Item>) -> LoadResult<ItemRegistry> {
        let registry = ItemRegistry::new(items)
            .map_err(|e| anyhow::anyhow!("[{}] {}", e.error_code(), e))?;
        tracing::info!(
            "loaded {} items ({} progressive)",
            registry.len(),
            registry.progressive().count()
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rando_core::{AtomicReward, ItemOracle, Reward};

    #[test]
    fn parses_atomic_and_progressive_records() {
        let registry = ItemLoader::parse_registry(
            r#"[
                { "id": "QI70", "type": "QuestItem" },
                { "id": "QI71", "type": "QuestItem" },
                { "id": "PK", "type": "QuestItem", "subItems": ["QI70", "QI71"] },
                { "id": "MK[3]", "type": 21 }
            ]"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 4);
        assert!(registry.item("PK").unwrap().is_progressive());
        assert_eq!(
            registry.item("MK[3]").unwrap().reward,
            Reward::Atomic(AtomicReward::Marks { amount: 3 })
        );
    }

    #[test]
    fn malformed_amount_fails_the_load() {
        let err = ItemLoader::parse(r#"[{ "id": "TR500", "type": "Tears" }]"#).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("ITEM_MALFORMED_AMOUNT"), "{message}");
        assert!(message.contains("TR500"), "{message}");
    }

    #[test]
    fn dangling_sub_item_fails_the_registry() {
        let err = ItemLoader::parse_registry(r#"[{ "id": "PK", "type": "QuestItem", "subItems": ["QI70"] }]"#)
            .unwrap_err();
        assert!(err.to_string().contains("REGISTRY_UNKNOWN_SUB_ITEM"));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(ItemLoader::parse("{ not json").is_err());
    }
}
