//! Completion certificate model.

use roadmapdao_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `certificates` table.
///
/// The row is inserted (reserved) before the mint is attempted; `tx_hash`
/// and `claimed_at` are filled once the mint succeeds.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Certificate {
    pub id: DbId,
    pub learner_id: DbId,
    pub roadmap_id: DbId,
    pub tx_hash: Option<String>,
    pub claimed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Certificate {
    pub fn is_minted(&self) -> bool {
        self.tx_hash.is_some()
    }
}
