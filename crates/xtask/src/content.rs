//! Shared content and ledger arguments for xtask commands

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use rando_content::ContentFactory;
use rando_core::{ItemRegistry, MemoryLedger, RewardConfig, StaticCatalog};

/// Data directory used when neither `--data-dir` nor `RANDO_DATA_DIR` is set.
const DEFAULT_DATA_DIR: &str = "crates/rando/content/data";

/// Ledger file used when `--ledger` is not given.
const DEFAULT_LEDGER_FILE: &str = "ledger.json";

#[derive(Args, Debug, Clone)]
pub struct ContentArgs {
    /// Content directory (defaults to $RANDO_DATA_DIR, then the bundled data)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

impl ContentArgs {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| std::env::var_os("RANDO_DATA_DIR").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    pub fn load(&self) -> Result<Content> {
        let factory = ContentFactory::new(self.data_dir());
        let dir = factory.data_dir().display().to_string();

        Ok(Content {
            registry: factory
                .load_registry()
                .with_context(|| format!("Invalid items in {dir}"))?,
            catalog: factory
                .load_catalog()
                .with_context(|| format!("Invalid catalog in {dir}"))?,
            config: factory
                .load_config()
                .with_context(|| format!("Invalid config in {dir}"))?,
        })
    }
}

/// Everything a grant reads.
pub struct Content {
    pub registry: ItemRegistry,
    pub catalog: StaticCatalog,
    pub config: RewardConfig,
}

#[derive(Args, Debug, Clone)]
pub struct LedgerArgs {
    /// Ledger file holding collected ids as a JSON array
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_LEDGER_FILE)]
    pub ledger: PathBuf,
}

/// Reads a ledger file. A missing file is an empty ledger.
pub fn load_ledger(path: &Path) -> Result<MemoryLedger> {
    if !path.exists() {
        tracing::debug!("{} not found; starting empty ledger", path.display());
        return Ok(MemoryLedger::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read ledger: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse ledger: {}", path.display()))
}

pub fn save_ledger(path: &Path, ledger: &MemoryLedger) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write ledger: {}", path.display()))
}
