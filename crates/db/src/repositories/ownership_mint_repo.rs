//! Repository for the `ownership_mints` table.

use roadmapdao_core::types::DbId;
use sqlx::PgPool;

use crate::models::ownership_mint::{MintStatus, OwnershipMint};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "roadmap_id, owner_address, status, tx_hash, failure_reason, created_at, updated_at";

/// Records the ownership-NFT side effect of roadmap creation.
pub struct OwnershipMintRepo;

impl OwnershipMintRepo {
    /// Open a `pending` record for a roadmap's ownership mint.
    ///
    /// Returns `None` if a record already exists; the roadmap id is the
    /// idempotency key, so a second dispatch for the same roadmap is a no-op.
    pub async fn begin(
        pool: &PgPool,
        roadmap_id: DbId,
        owner_address: &str,
    ) -> Result<Option<OwnershipMint>, sqlx::Error> {
        let query = format!(
            "INSERT INTO ownership_mints (roadmap_id, owner_address, status)
             VALUES ($1, $2, $3)
             ON CONFLICT (roadmap_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OwnershipMint>(&query)
            .bind(roadmap_id)
            .bind(owner_address)
            .bind(MintStatus::Pending.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Store the final status of a mint.
    ///
    /// Returns `None` if the record is gone (the roadmap was deleted while
    /// the mint was in flight).
    pub async fn finish(
        pool: &PgPool,
        roadmap_id: DbId,
        status: MintStatus,
        tx_hash: Option<&str>,
        failure_reason: Option<&str>,
    ) -> Result<Option<OwnershipMint>, sqlx::Error> {
        let query = format!(
            "UPDATE ownership_mints SET status = $2, tx_hash = $3, failure_reason = $4
             WHERE roadmap_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OwnershipMint>(&query)
            .bind(roadmap_id)
            .bind(status.as_str())
            .bind(tx_hash)
            .bind(failure_reason)
            .fetch_optional(pool)
            .await
    }

    /// Find the mint record of a roadmap.
    pub async fn find_by_roadmap(
        pool: &PgPool,
        roadmap_id: DbId,
    ) -> Result<Option<OwnershipMint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ownership_mints WHERE roadmap_id = $1");
        sqlx::query_as::<_, OwnershipMint>(&query)
            .bind(roadmap_id)
            .fetch_optional(pool)
            .await
    }
}
