//! User entity model.

use roadmapdao_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    /// Lowercase `0x`-prefixed address; unique.
    pub wallet_address: String,
    pub is_expert: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public identity of a roadmap author, embedded in roadmap responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpertIdentity {
    pub id: DbId,
    pub wallet_address: String,
}
