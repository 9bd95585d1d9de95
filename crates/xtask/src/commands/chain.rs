//! Inspect a chained item against a ledger file

use anyhow::Result;
use clap::Parser;
use console::style;

use rando_core::{Env, ImageId, ItemOracle, current_image, upgraded_image};

use crate::content::{ContentArgs, LedgerArgs, load_ledger};

/// Show where a chained item stands against a ledger
#[derive(Parser, Debug)]
pub struct Chain {
    /// Id of the item to inspect
    #[arg(value_name = "ID")]
    id: String,

    #[command(flatten)]
    content: ContentArgs,

    #[command(flatten)]
    ledger: LedgerArgs,
}

impl Chain {
    pub fn execute(self) -> Result<()> {
        let content = self.content.load()?;
        let ledger = load_ledger(&self.ledger.ledger)?;

        let Some(item) = content.registry.item(&self.id) else {
            anyhow::bail!("Unknown item: {}", self.id);
        };
        let env = Env::new(&content.catalog, &content.registry, &content.config);

        println!("{} {}", style("Item:").bold().cyan(), item.id);
        if !item.name.is_empty() {
            println!("{} {}", style("Name:").bold().cyan(), item.name);
        }

        let Some(chain) = item.chain() else {
            println!("{}", style("Not a chained item").dim());
            println!(
                "{} {}",
                style("Image:").bold().cyan(),
                show_image(current_image(item, &env, &ledger))
            );
            return Ok(());
        };

        let position = chain.position(&ledger);
        println!(
            "{} {}/{}",
            style("Level:").bold().cyan(),
            position.level,
            position.len
        );
        println!();

        for (index, sub_item) in chain.sub_items().iter().enumerate() {
            let marker = if Some(index) == position.current_index() {
                style("current").green()
            } else if Some(index) == position.upgraded_index() {
                style("next").yellow()
            } else if index < position.level {
                style("held").dim()
            } else {
                style("").dim()
            };
            println!("  {:>2}. {:<12} {}", index + 1, sub_item, marker);
        }
        println!();

        println!(
            "{} {}",
            style("Current Image:").bold().cyan(),
            show_image(current_image(item, &env, &ledger))
        );
        println!(
            "{} {}",
            style("Upgraded Image:").bold().cyan(),
            show_image(upgraded_image(item, &env, &ledger))
        );
        if position.is_exhausted() {
            println!("{}", style("Chain exhausted").dim());
        }

        Ok(())
    }
}

fn show_image(image: Option<ImageId>) -> String {
    image.map_or_else(|| "-".to_owned(), |image| image.to_string())
}
