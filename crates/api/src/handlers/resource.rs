//! Handlers for learning resources attached to steps.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roadmapdao_core::error::CoreError;
use roadmapdao_core::resource_type::ResourceType;
use roadmapdao_core::types::DbId;
use roadmapdao_db::models::resource::{CreateResource, Resource};
use roadmapdao_db::repositories::ResourceRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::roles::ExpertUser;
use crate::state::AppState;

/// POST /api/v1/expert/step/{id}/resource
pub async fn create(
    State(state): State<AppState>,
    expert: ExpertUser,
    AppPath(step_id): AppPath<DbId>,
    AppJson(input): AppJson<CreateResource>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    input.validate().map_err(CoreError::from)?;
    let resource_type: ResourceType = input.resource_type.parse()?;

    let resource =
        ResourceRepo::create_in_owned_step(&state.pool, step_id, expert.id, resource_type, &input)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Step",
                id: step_id,
            }))?;
    Ok((StatusCode::CREATED, Json(resource)))
}
