pub mod expert;
pub mod health;
pub mod learner;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /expert/roadmap                              create (expert)
/// /expert/roadmaps                             list own roadmaps
/// /expert/roadmap/{id}                         get, update, delete
/// /expert/roadmap/{id}/ownership-mint          ownership mint status
/// /expert/roadmap/{id}/step                    add step
/// /expert/step/{id}                            update, delete step
/// /expert/step/{id}/resource                   add resource
///
/// /learner/roadmaps                            browse (public)
/// /learner/roadmap/{id}                        view (public)
/// /learner/roadmap/{id}/enroll                 enroll (learner)
/// /learner/roadmap/{id}/claim-certificate      claim certificate
/// /learner/enrollments                         list own enrollments
/// /learner/enrollment/{id}/progress            update progress
/// /learner/certificates                        list own certificates
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/expert", expert::router())
        .nest("/learner", learner::router())
}
