//! Route definitions for the `/expert` namespace.
//!
//! Every handler here takes an `ExpertUser`, so all routes require a
//! provisioned expert wallet.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{resource, roadmap, step};
use crate::state::AppState;

/// Routes mounted at `/expert`.
///
/// ```text
/// POST   /roadmap                       -> roadmap::create
/// GET    /roadmaps                      -> roadmap::list
/// GET    /roadmap/{id}                  -> roadmap::get_by_id
/// PUT    /roadmap/{id}                  -> roadmap::update
/// DELETE /roadmap/{id}                  -> roadmap::delete
/// GET    /roadmap/{id}/ownership-mint   -> roadmap::ownership_mint_status
/// POST   /roadmap/{id}/step             -> step::create
/// PUT    /step/{id}                     -> step::update
/// DELETE /step/{id}                     -> step::delete
/// POST   /step/{id}/resource            -> resource::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roadmap", post(roadmap::create))
        .route("/roadmaps", get(roadmap::list))
        .route(
            "/roadmap/{id}",
            get(roadmap::get_by_id)
                .put(roadmap::update)
                .delete(roadmap::delete),
        )
        .route(
            "/roadmap/{id}/ownership-mint",
            get(roadmap::ownership_mint_status),
        )
        .route("/roadmap/{id}/step", post(step::create))
        .route("/step/{id}", put(step::update).delete(step::delete))
        .route("/step/{id}/resource", post(resource::create))
}
