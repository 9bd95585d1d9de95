//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod chain;
mod grant;
mod reset_ledger;
mod validate;

pub use chain::Chain;
pub use grant::Grant;
pub use reset_ledger::ResetLedger;
pub use validate::Validate;
