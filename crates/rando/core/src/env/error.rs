//! Item registry errors.
//!
//! Raised when a loaded item set is internally inconsistent. The registry is
//! built once at startup, so all of these abort loading.

use crate::error::{ErrorSeverity, RandoError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegistryError {
    /// Two records share an id.
    #[error("item '{id}' is defined more than once")]
    DuplicateItem { id: String },

    /// A chain names a sub-item that has no record.
    #[error("item '{parent}' lists unknown sub-item '{sub_item}'")]
    UnknownSubItem { parent: String, sub_item: String },

    /// Following sub-items from this item leads back to it.
    #[error("progressive item '{id}' reaches itself through its sub-items")]
    ChainCycle { id: String },
}

impl RandoError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateItem { .. } | Self::UnknownSubItem { .. } => ErrorSeverity::Validation,
            Self::ChainCycle { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateItem { .. } => "REGISTRY_DUPLICATE_ITEM",
            Self::UnknownSubItem { .. } => "REGISTRY_UNKNOWN_SUB_ITEM",
            Self::ChainCycle { .. } => "REGISTRY_CHAIN_CYCLE",
        }
    }
}
