//! Startup provisioning of expert accounts.

use roadmapdao_db::repositories::UserRepo;
use sqlx::PgPool;

/// Create or promote every wallet in `wallets` to an expert.
///
/// Wallets must already be normalised. Returns the number of experts seeded.
pub async fn seed_experts(pool: &PgPool, wallets: &[String]) -> Result<usize, sqlx::Error> {
    for wallet in wallets {
        let user = UserRepo::upsert_expert(pool, wallet).await?;
        tracing::info!(user_id = user.id, wallet_address = %user.wallet_address, "Expert provisioned");
    }
    Ok(wallets.len())
}
