//! Reset the collection ledger
//!
//! Starting a new session clears every collected id.

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::content::{LedgerArgs, load_ledger, save_ledger};

/// Clear the ledger file to start a new session
#[derive(Parser, Debug)]
pub struct ResetLedger {
    #[command(flatten)]
    ledger: LedgerArgs,
}

impl ResetLedger {
    pub fn execute(self) -> Result<()> {
        let path = &self.ledger.ledger;
        let mut ledger = load_ledger(path)?;
        let cleared = ledger.len();
        ledger.reset();
        save_ledger(path, &ledger)?;

        println!(
            "{} {} ({} ids cleared)",
            style("✓ Ledger reset:").green().bold(),
            path.display(),
            cleared
        );
        Ok(())
    }
}
