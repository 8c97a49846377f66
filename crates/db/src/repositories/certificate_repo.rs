//! Repository for the `certificates` table.

use roadmapdao_core::types::DbId;
use sqlx::PgPool;

use crate::models::certificate::Certificate;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, learner_id, roadmap_id, tx_hash, claimed_at, created_at, updated_at";

/// Tracks certificate claims. A row doubles as the idempotency key for a
/// `(learner, roadmap)` mint.
pub struct CertificateRepo;

impl CertificateRepo {
    /// Find the learner's certificate row for a roadmap, minted or in flight.
    pub async fn find_for_learner(
        pool: &PgPool,
        learner_id: DbId,
        roadmap_id: DbId,
    ) -> Result<Option<Certificate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM certificates WHERE learner_id = $1 AND roadmap_id = $2"
        );
        sqlx::query_as::<_, Certificate>(&query)
            .bind(learner_id)
            .bind(roadmap_id)
            .fetch_optional(pool)
            .await
    }

    /// Reserve the claim before minting.
    ///
    /// Returns `None` if a row already exists, meaning another claim has
    /// either succeeded or is in flight.
    pub async fn reserve(
        pool: &PgPool,
        learner_id: DbId,
        roadmap_id: DbId,
    ) -> Result<Option<Certificate>, sqlx::Error> {
        let query = format!(
            "INSERT INTO certificates (learner_id, roadmap_id)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_certificates_learner_roadmap DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certificate>(&query)
            .bind(learner_id)
            .bind(roadmap_id)
            .fetch_optional(pool)
            .await
    }

    /// Record a successful mint on a reserved row.
    pub async fn mark_minted(
        pool: &PgPool,
        id: DbId,
        tx_hash: &str,
    ) -> Result<Certificate, sqlx::Error> {
        let query = format!(
            "UPDATE certificates SET tx_hash = $2, claimed_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certificate>(&query)
            .bind(id)
            .bind(tx_hash)
            .fetch_one(pool)
            .await
    }

    /// Drop a reservation whose mint failed so the learner can retry.
    /// Minted rows are never released. Returns `true` if a row was removed.
    pub async fn release(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = $1 AND tx_hash IS NULL")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a learner's minted certificates, newest first.
    pub async fn list_minted_by_learner(
        pool: &PgPool,
        learner_id: DbId,
    ) -> Result<Vec<Certificate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM certificates
             WHERE learner_id = $1 AND tx_hash IS NOT NULL
             ORDER BY claimed_at DESC, id DESC"
        );
        sqlx::query_as::<_, Certificate>(&query)
            .bind(learner_id)
            .fetch_all(pool)
            .await
    }
}
