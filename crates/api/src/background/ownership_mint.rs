//! Ownership token minting for newly created roadmaps.
//!
//! Each roadmap gets at most one ownership mint, keyed by roadmap id in the
//! `ownership_mints` table. The mint runs after the roadmap insert has
//! committed; its result is recorded on the row and never reaches the
//! request that created the roadmap.

use std::sync::Arc;

use roadmapdao_core::types::DbId;
use roadmapdao_db::models::ownership_mint::MintStatus;
use roadmapdao_db::repositories::OwnershipMintRepo;
use roadmapdao_nft::{MintOutcome, NftService};
use sqlx::PgPool;

use crate::state::AppState;

/// Spawn the ownership mint for `roadmap_id` on the state's task tracker.
pub fn dispatch(state: &AppState, roadmap_id: DbId, owner_address: String) {
    let pool = state.pool.clone();
    let nft = Arc::clone(&state.nft);
    state.mint_tasks.spawn(async move {
        run(&pool, nft.as_ref(), roadmap_id, &owner_address).await;
    });
}

/// Mint the ownership token and record the outcome.
///
/// Returns `None` when a mint was already recorded for the roadmap or the
/// bookkeeping itself failed.
pub async fn run(
    pool: &PgPool,
    nft: &dyn NftService,
    roadmap_id: DbId,
    owner_address: &str,
) -> Option<MintOutcome> {
    match OwnershipMintRepo::begin(pool, roadmap_id, owner_address).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::debug!(roadmap_id, "Ownership mint already recorded");
            return None;
        }
        Err(e) => {
            tracing::error!(roadmap_id, error = %e, "Ownership mint: failed to record start");
            return None;
        }
    }

    let result = nft
        .mint_ownership(owner_address, &roadmap_id.to_string())
        .await;
    let outcome = MintOutcome::from_result(result);

    let status = match &outcome {
        MintOutcome::Completed(tx_hash) => {
            tracing::info!(roadmap_id, tx_hash = %tx_hash, "Ownership NFT minted");
            MintStatus::Completed
        }
        MintOutcome::Skipped => {
            tracing::debug!(roadmap_id, "Ownership mint skipped: minting disabled");
            MintStatus::Skipped
        }
        MintOutcome::Failed(reason) => {
            tracing::warn!(roadmap_id, reason = %reason, "Ownership mint failed");
            MintStatus::Failed
        }
    };

    if let Err(e) = OwnershipMintRepo::finish(
        pool,
        roadmap_id,
        status,
        outcome.tx_hash(),
        outcome.failure_reason(),
    )
    .await
    {
        tracing::error!(roadmap_id, error = %e, "Ownership mint: failed to record outcome");
        return None;
    }

    Some(outcome)
}
