//! Handlers for an expert's own roadmaps (`/expert/roadmap...`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roadmapdao_core::error::CoreError;
use roadmapdao_core::types::DbId;
use roadmapdao_db::models::ownership_mint::OwnershipMint;
use roadmapdao_db::models::roadmap::{
    CreateRoadmap, Roadmap, RoadmapDetail, RoadmapSummary, UpdateRoadmap,
};
use roadmapdao_db::repositories::{OwnershipMintRepo, RoadmapDeletion, RoadmapRepo};
use validator::Validate;

use crate::background::ownership_mint;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::roles::ExpertUser;
use crate::state::AppState;

/// POST /api/v1/expert/roadmap
///
/// The ownership mint is dispatched once the insert has committed.
pub async fn create(
    State(state): State<AppState>,
    expert: ExpertUser,
    AppJson(input): AppJson<CreateRoadmap>,
) -> AppResult<(StatusCode, Json<Roadmap>)> {
    input.validate().map_err(CoreError::from)?;

    let roadmap = RoadmapRepo::create(&state.pool, expert.id, &input).await?;
    tracing::info!(roadmap_id = roadmap.id, expert_id = expert.id, "Roadmap created");

    ownership_mint::dispatch(&state, roadmap.id, expert.wallet_address);

    Ok((StatusCode::CREATED, Json(roadmap)))
}

/// GET /api/v1/expert/roadmaps
pub async fn list(
    State(state): State<AppState>,
    expert: ExpertUser,
) -> AppResult<Json<Vec<RoadmapSummary>>> {
    let roadmaps = RoadmapRepo::list_by_expert(&state.pool, expert.id).await?;
    Ok(Json(roadmaps))
}

/// GET /api/v1/expert/roadmap/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    expert: ExpertUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<RoadmapDetail>> {
    let detail = RoadmapRepo::find_detail(&state.pool, id, Some(expert.id))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Roadmap",
            id,
        }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/expert/roadmap/{id}
pub async fn update(
    State(state): State<AppState>,
    expert: ExpertUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateRoadmap>,
) -> AppResult<Json<Roadmap>> {
    input.validate().map_err(CoreError::from)?;

    let roadmap = RoadmapRepo::update_owned(&state.pool, id, expert.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Roadmap",
            id,
        }))?;
    Ok(Json(roadmap))
}

/// DELETE /api/v1/expert/roadmap/{id}
pub async fn delete(
    State(state): State<AppState>,
    expert: ExpertUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    match RoadmapRepo::delete_owned(&state.pool, id, expert.id).await? {
        RoadmapDeletion::Deleted => {
            tracing::info!(roadmap_id = id, expert_id = expert.id, "Roadmap deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        RoadmapDeletion::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Roadmap",
            id,
        })),
        RoadmapDeletion::HasEnrollments(count) => Err(AppError::Core(CoreError::Conflict(
            format!("Roadmap has {count} enrollment(s) and cannot be deleted"),
        ))),
    }
}

/// GET /api/v1/expert/roadmap/{id}/ownership-mint
pub async fn ownership_mint_status(
    State(state): State<AppState>,
    expert: ExpertUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<OwnershipMint>> {
    RoadmapRepo::find_owned(&state.pool, id, expert.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Roadmap",
            id,
        }))?;

    let mint = OwnershipMintRepo::find_by_roadmap(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::NotFoundMessage(format!("No ownership mint recorded for roadmap {id}"))
        })?;
    Ok(Json(mint))
}
