//! Grant items against a logging host
//!
//! Runs the reward engine exactly as the game would, printing each manager
//! call, then writes the updated ledger back.

use anyhow::Result;
use clap::Parser;
use console::style;

use rando_core::{Env, ItemOracle, RewardEngine};

use crate::content::{ContentArgs, LedgerArgs, load_ledger, save_ledger};
use crate::host::LoggingHost;

/// Grant items against a logging host and update the ledger
#[derive(Parser, Debug)]
pub struct Grant {
    /// Ids to grant, in order
    #[arg(value_name = "ID", required = true)]
    ids: Vec<String>,

    #[command(flatten)]
    content: ContentArgs,

    #[command(flatten)]
    ledger: LedgerArgs,

    /// Print effects without saving the ledger
    #[arg(long)]
    dry_run: bool,
}

impl Grant {
    pub fn execute(self) -> Result<()> {
        let content = self.content.load()?;
        let mut ledger = load_ledger(&self.ledger.ledger)?;
        let host = LoggingHost::default();
        let mut handles = host.handles();

        {
            let env = Env::new(&content.catalog, &content.registry, &content.config)
                .into_reward_env();
            let mut engine = RewardEngine::new(env, &mut ledger, handles.managers());

            for id in &self.ids {
                println!("{} {}", style("Grant").bold().yellow(), style(id).cyan());
                if content.registry.item(id).is_none() {
                    println!("  {} unknown item", style("✗").red());
                    continue;
                }
                let before = host.effects();
                engine.grant_id(id);
                if host.effects() == before {
                    println!("  {}", style("no effect").dim());
                }
            }
        }

        println!();
        println!("{} {}", style("Collected:").bold().cyan(), ledger.len());

        if self.dry_run {
            println!("{}", style("Dry run: ledger not saved").dim());
            return Ok(());
        }

        save_ledger(&self.ledger.ledger, &ledger)?;
        println!(
            "{} {}",
            style("✓ Ledger saved to").green().bold(),
            self.ledger.ledger.display()
        );
        Ok(())
    }
}
