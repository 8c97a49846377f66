//! Public roadmap discovery for learners.

use axum::extract::State;
use axum::Json;
use roadmapdao_core::error::CoreError;
use roadmapdao_core::types::DbId;
use roadmapdao_db::models::roadmap::{RoadmapDetail, RoadmapSummary};
use roadmapdao_db::repositories::RoadmapRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::state::AppState;

/// GET /api/v1/learner/roadmaps
pub async fn browse(State(state): State<AppState>) -> AppResult<Json<Vec<RoadmapSummary>>> {
    let roadmaps = RoadmapRepo::list_all(&state.pool).await?;
    Ok(Json(roadmaps))
}

/// GET /api/v1/learner/roadmap/{id}
pub async fn view(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<RoadmapDetail>> {
    let detail = RoadmapRepo::find_detail(&state.pool, id, None)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Roadmap",
            id,
        }))?;
    Ok(Json(detail))
}
