//! Route definitions for the `/learner` namespace.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{catalog, certificate, enrollment};
use crate::state::AppState;

/// Routes mounted at `/learner`.
///
/// Browsing and viewing are public; the rest take a `LearnerUser`.
///
/// ```text
/// GET    /roadmaps                          -> catalog::browse
/// GET    /roadmap/{id}                      -> catalog::view
/// POST   /roadmap/{id}/enroll               -> enrollment::enroll
/// POST   /roadmap/{id}/claim-certificate    -> certificate::claim
/// GET    /enrollments                       -> enrollment::list
/// PUT    /enrollment/{id}/progress          -> enrollment::update_progress
/// GET    /certificates                      -> certificate::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roadmaps", get(catalog::browse))
        .route("/roadmap/{id}", get(catalog::view))
        .route("/roadmap/{id}/enroll", post(enrollment::enroll))
        .route(
            "/roadmap/{id}/claim-certificate",
            post(certificate::claim),
        )
        .route("/enrollments", get(enrollment::list))
        .route(
            "/enrollment/{id}/progress",
            put(enrollment::update_progress),
        )
        .route("/certificates", get(certificate::list))
}
