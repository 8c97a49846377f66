//! Ownership-NFT mint record model.

use roadmapdao_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Lifecycle of a roadmap's ownership mint. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintStatus {
    Pending,
    Completed,
    Skipped,
    Failed,
}

impl MintStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

/// A row from the `ownership_mints` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OwnershipMint {
    pub roadmap_id: DbId,
    pub owner_address: String,
    /// One of the [`MintStatus`] names.
    pub status: String,
    pub tx_hash: Option<String>,
    pub failure_reason: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OwnershipMint {
    pub fn has_status(&self, status: MintStatus) -> bool {
        self.status == status.as_str()
    }
}
