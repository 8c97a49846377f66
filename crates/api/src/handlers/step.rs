//! Handlers for steps of an expert's roadmaps.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roadmapdao_core::error::CoreError;
use roadmapdao_core::types::DbId;
use roadmapdao_db::models::step::{CreateStep, Step, StepWithResources, UpdateStep};
use roadmapdao_db::repositories::{ResourceRepo, StepRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::roles::ExpertUser;
use crate::state::AppState;

/// POST /api/v1/expert/roadmap/{id}/step
///
/// The new step is appended after the roadmap's current last step.
pub async fn create(
    State(state): State<AppState>,
    expert: ExpertUser,
    AppPath(roadmap_id): AppPath<DbId>,
    AppJson(input): AppJson<CreateStep>,
) -> AppResult<(StatusCode, Json<Step>)> {
    input.validate().map_err(CoreError::from)?;

    let step = StepRepo::create_in_owned_roadmap(&state.pool, roadmap_id, expert.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Roadmap",
            id: roadmap_id,
        }))?;
    tracing::info!(step_id = step.id, roadmap_id, order = step.step_order, "Step added");
    Ok((StatusCode::CREATED, Json(step)))
}

/// PUT /api/v1/expert/step/{id}
pub async fn update(
    State(state): State<AppState>,
    expert: ExpertUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateStep>,
) -> AppResult<Json<StepWithResources>> {
    input.validate().map_err(CoreError::from)?;

    let step = StepRepo::update_owned(&state.pool, id, expert.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Step", id }))?;
    let resources = ResourceRepo::list_by_step(&state.pool, step.id).await?;
    Ok(Json(StepWithResources { step, resources }))
}

/// DELETE /api/v1/expert/step/{id}
pub async fn delete(
    State(state): State<AppState>,
    expert: ExpertUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if StepRepo::delete_owned(&state.pool, id, expert.id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Step", id }))
    }
}
