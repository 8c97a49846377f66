//! Repository for the `users` table.

use roadmapdao_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, wallet_address, is_expert, created_at, updated_at";

/// Provides lookups and provisioning for users.
///
/// Wallet addresses passed in must already be normalised
/// (see `roadmapdao_core::wallet::normalize_wallet_address`).
pub struct UserRepo;

impl UserRepo {
    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by wallet address.
    pub async fn find_by_wallet(
        pool: &PgPool,
        wallet_address: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE wallet_address = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(wallet_address)
            .fetch_optional(pool)
            .await
    }

    /// Return the user for `wallet_address`, creating a learner if none exists.
    ///
    /// An existing row is returned untouched, so an expert stays an expert
    /// and the caller decides whether the role is acceptable.
    pub async fn get_or_create_learner(
        pool: &PgPool,
        wallet_address: &str,
    ) -> Result<User, sqlx::Error> {
        let insert = format!(
            "INSERT INTO users (wallet_address, is_expert)
             VALUES ($1, false)
             ON CONFLICT ON CONSTRAINT uq_users_wallet_address DO NOTHING
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, User>(&insert)
            .bind(wallet_address)
            .fetch_optional(pool)
            .await?;

        match created {
            Some(user) => {
                tracing::info!(user_id = user.id, "Provisioned learner on first request");
                Ok(user)
            }
            None => Self::find_by_wallet(pool, wallet_address)
                .await?
                .ok_or(sqlx::Error::RowNotFound),
        }
    }

    /// Create or promote the user for `wallet_address` to expert.
    ///
    /// Used only by explicit provisioning (startup seeding), never by
    /// request handling.
    pub async fn upsert_expert(pool: &PgPool, wallet_address: &str) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (wallet_address, is_expert)
             VALUES ($1, true)
             ON CONFLICT ON CONSTRAINT uq_users_wallet_address
             DO UPDATE SET is_expert = true
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(wallet_address)
            .fetch_one(pool)
            .await
    }
}
