//! Handlers for a learner's enrollments and progress.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roadmapdao_core::error::CoreError;
use roadmapdao_core::progress::parse_progress;
use roadmapdao_core::types::DbId;
use roadmapdao_db::models::enrollment::{Enrollment, EnrollmentWithRoadmap, UpdateProgress};
use roadmapdao_db::repositories::{EnrollmentRepo, RoadmapRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::roles::LearnerUser;
use crate::state::AppState;

/// POST /api/v1/learner/roadmap/{id}/enroll
pub async fn enroll(
    State(state): State<AppState>,
    learner: LearnerUser,
    AppPath(roadmap_id): AppPath<DbId>,
) -> AppResult<(StatusCode, Json<Enrollment>)> {
    RoadmapRepo::find_by_id(&state.pool, roadmap_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Roadmap",
            id: roadmap_id,
        }))?;

    let enrollment = EnrollmentRepo::create(&state.pool, learner.id, roadmap_id)
        .await?
        .ok_or_else(|| AppError::BadRequest("Already enrolled in this roadmap".into()))?;
    tracing::info!(
        enrollment_id = enrollment.id,
        learner_id = learner.id,
        roadmap_id,
        "Learner enrolled"
    );
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// GET /api/v1/learner/enrollments
pub async fn list(
    State(state): State<AppState>,
    learner: LearnerUser,
) -> AppResult<Json<Vec<EnrollmentWithRoadmap>>> {
    let enrollments = EnrollmentRepo::list_by_learner(&state.pool, learner.id).await?;
    Ok(Json(enrollments))
}

/// PUT /api/v1/learner/enrollment/{id}/progress
pub async fn update_progress(
    State(state): State<AppState>,
    learner: LearnerUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProgress>,
) -> AppResult<Json<Enrollment>> {
    let progress = parse_progress(&input.progress)?;

    let enrollment = EnrollmentRepo::update_progress_owned(&state.pool, id, learner.id, progress)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enrollment",
            id,
        }))?;
    Ok(Json(enrollment))
}
