//! Completion certificate claims.
//!
//! A claim passes the local checks (enrolled, 100% progress, wallet on file),
//! then the "already claimed" checks against both the `certificates` table
//! and the contract. The certificate row is reserved before minting so two
//! concurrent claims cannot both reach the contract.

use axum::extract::State;
use axum::Json;
use roadmapdao_core::certificate::{check_local_eligibility, ClaimRejection};
use roadmapdao_core::types::DbId;
use roadmapdao_db::models::certificate::Certificate;
use roadmapdao_db::repositories::{CertificateRepo, EnrollmentRepo};
use roadmapdao_nft::TxHash;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::middleware::roles::LearnerUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub message: &'static str,
    pub tx_hash: TxHash,
    pub roadmap_id: DbId,
}

/// POST /api/v1/learner/roadmap/{id}/claim-certificate
pub async fn claim(
    State(state): State<AppState>,
    learner: LearnerUser,
    AppPath(roadmap_id): AppPath<DbId>,
) -> AppResult<Json<ClaimResponse>> {
    let enrollment = EnrollmentRepo::find_for_learner(&state.pool, learner.id, roadmap_id).await?;
    check_local_eligibility(
        enrollment.map(|e| e.progress),
        Some(learner.wallet_address.as_str()),
    )?;

    if CertificateRepo::find_for_learner(&state.pool, learner.id, roadmap_id)
        .await?
        .is_some()
    {
        return Err(ClaimRejection::AlreadyClaimed.into());
    }

    let roadmap_key = roadmap_id.to_string();
    match state
        .nft
        .has_completed_roadmap(&learner.wallet_address, &roadmap_key)
        .await
    {
        Ok(true) => return Err(ClaimRejection::AlreadyClaimed.into()),
        Ok(false) => {}
        Err(e) => {
            tracing::warn!(
                roadmap_id,
                learner_id = learner.id,
                error = %e,
                "Completion lookup failed; relying on local certificate records"
            );
        }
    }

    let reservation = CertificateRepo::reserve(&state.pool, learner.id, roadmap_id)
        .await?
        .ok_or(ClaimRejection::AlreadyClaimed)?;

    let tx_hash = match state
        .nft
        .mint_completion_certificate(&learner.wallet_address, &roadmap_key)
        .await
    {
        Ok(tx_hash) => tx_hash,
        Err(e) => {
            if let Err(release_err) = CertificateRepo::release(&state.pool, reservation.id).await {
                tracing::error!(
                    certificate_id = reservation.id,
                    error = %release_err,
                    "Failed to release certificate reservation"
                );
            }
            return Err(AppError::MintFailed(e));
        }
    };

    CertificateRepo::mark_minted(&state.pool, reservation.id, &tx_hash).await?;
    tracing::info!(
        roadmap_id,
        learner_id = learner.id,
        tx_hash = %tx_hash,
        "Completion certificate minted"
    );

    Ok(Json(ClaimResponse {
        message: "Certificate claimed successfully",
        tx_hash,
        roadmap_id,
    }))
}

/// GET /api/v1/learner/certificates
pub async fn list(
    State(state): State<AppState>,
    learner: LearnerUser,
) -> AppResult<Json<Vec<Certificate>>> {
    let certificates = CertificateRepo::list_minted_by_learner(&state.pool, learner.id).await?;
    Ok(Json(certificates))
}
