//! Item data errors.
//!
//! Raised while converting persisted item records into [`super::Item`]
//! values. These indicate corrupt static data, not runtime conditions.

use super::amount::AmountError;
use crate::error::{ErrorSeverity, RandoError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemDataError {
    /// A Tears or Marks id lacks a well-formed bracketed amount.
    #[error("item '{id}' has a malformed amount suffix: {reason}")]
    MalformedAmount { id: String, reason: AmountError },

    /// The record has no id to key the ledger and catalogs with.
    #[error("item record has an empty id")]
    EmptyId,
}

impl RandoError for ItemDataError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MalformedAmount { .. } => ErrorSeverity::Fatal,
            Self::EmptyId => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedAmount { .. } => "ITEM_MALFORMED_AMOUNT",
            Self::EmptyId => "ITEM_EMPTY_ID",
        }
    }
}
