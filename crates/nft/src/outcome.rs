//! Tagged result of a best-effort mint.

use crate::{NftError, TxHash};

/// What happened to a background mint.
///
/// Kept separate from the owning entity's lifecycle: a roadmap exists
/// whether or not its ownership token was minted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintOutcome {
    Completed(TxHash),
    /// Nothing was attempted (minting disabled).
    Skipped,
    Failed(String),
}

impl MintOutcome {
    /// Classify a mint call's result.
    pub fn from_result(result: Result<TxHash, NftError>) -> Self {
        match result {
            Ok(tx_hash) => Self::Completed(tx_hash),
            Err(NftError::Disabled) => Self::Skipped,
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn tx_hash(&self) -> Option<&str> {
        match self {
            Self::Completed(tx) => Some(tx),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
