//! Validate reward content
//!
//! Loads items, catalog and config, then checks that every catalog-backed
//! item and every configured id resolves.

use anyhow::Result;
use clap::Parser;
use console::style;

use rando_core::{CatalogKind, CatalogOracle, Reward};

use crate::content::ContentArgs;

/// Load all content and report problems
#[derive(Parser, Debug)]
pub struct Validate {
    #[command(flatten)]
    content: ContentArgs,

    /// Treat catalog misses as errors
    #[arg(long)]
    strict: bool,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let content = self.content.load()?;

        println!(
            "{} {}",
            style("Data Directory:").bold().cyan(),
            self.content.data_dir().display()
        );
        println!(
            "{} {} ({} progressive)",
            style("Items:").bold().cyan(),
            content.registry.len(),
            content.registry.progressive().count()
        );
        println!(
            "{} {}",
            style("Catalog Entries:").bold().cyan(),
            content.catalog.len()
        );
        println!();

        let mut misses = Vec::new();
        for item in content.registry.iter() {
            if let Reward::Atomic(reward) = &item.reward
                && let Some(kind) = reward.catalog_kind()
                && content.catalog.try_get(kind, &item.id).is_none()
            {
                misses.push(format!("{kind} '{}'", item.id));
            }
        }

        let config = &content.config;
        if content
            .catalog
            .try_get(CatalogKind::Ability, &config.switch_ability_id)
            .is_none()
        {
            misses.push(format!("switch ability '{}'", config.switch_ability_id));
        }
        if content
            .catalog
            .try_get(CatalogKind::QuestItem, &config.marks_image_id)
            .is_none()
        {
            misses.push(format!("marks image '{}'", config.marks_image_id));
        }

        if misses.is_empty() {
            println!("{}", style("✓ All content resolves").green().bold());
            return Ok(());
        }

        println!("{}", style("Missing from catalog:").bold().yellow());
        for miss in &misses {
            println!("  {} {}", style("✗").red(), miss);
        }

        if self.strict {
            anyhow::bail!("{} catalog misses", misses.len());
        }
        Ok(())
    }
}
