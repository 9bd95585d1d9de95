//! Reward configuration loader.

use std::path::Path;

use rando_core::RewardConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for reward configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<RewardConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RewardConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse(r#"switch_ability_id = "AB07""#).unwrap();
        assert_eq!(config.switch_ability_id, "AB07");
        assert_eq!(config.marks_image_id, RewardConfig::DEFAULT_MARKS_IMAGE_ID);

        assert_eq!(ConfigLoader::parse("").unwrap(), RewardConfig::default());
    }
}
