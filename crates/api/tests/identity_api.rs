//! Wallet identity and role enforcement across both namespaces.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, seed_expert, wallet};
use roadmapdao_db::repositories::UserRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn expert_route_without_header_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app.router(), "/api/v1/expert/roadmaps", None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing Authorization header");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_wallet_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app.router(), "/api/v1/learner/enrollments", Some("not-a-wallet")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_wallet_is_not_made_an_expert(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let stranger = wallet(77);

    let response = post_json(
        app.router(),
        "/api/v1/expert/roadmap",
        Some(&stranger),
        serde_json::json!({"title": "T", "description": "D"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Unknown wallet address");
    assert!(UserRepo::find_by_wallet(&pool, &stranger).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn learner_is_provisioned_on_first_request(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let learner = wallet(100);

    let response = get(app.router(), "/api/v1/learner/enrollments", Some(&learner)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));

    let user = UserRepo::find_by_wallet(&pool, &learner).await.unwrap().unwrap();
    assert!(!user.is_expert);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wallet_header_is_case_insensitive(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let shouting = format!("0x{}", expert[2..].to_ascii_uppercase());

    let response = get(app.router(), "/api/v1/expert/roadmaps", Some(&shouting)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn learner_cannot_use_expert_routes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let learner = wallet(100);
    get(app.router(), "/api/v1/learner/enrollments", Some(&learner)).await;

    let response = get(app.router(), "/api/v1/expert/roadmaps", Some(&learner)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Expert access required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn expert_cannot_use_learner_routes(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;

    let response = get(app.router(), "/api/v1/learner/enrollments", Some(&expert)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Learner access required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn discovery_is_public(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let id = common::create_roadmap(&app, &expert, "Rust").await;

    let response = get(app.router(), "/api/v1/learner/roadmaps", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = get(app.router(), &format!("/api/v1/learner/roadmap/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
