//! HTTP-level integration tests for the `/learner` namespace.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    add_step, body_json, create_roadmap, get, post, put_json, seed_expert, send_raw, wallet,
};
use roadmapdao_db::repositories::{CertificateRepo, UserRepo};
use sqlx::PgPool;

/// Enroll `learner` in `roadmap_id` and return the enrollment id.
async fn enroll(app: &common::TestApp, learner: &str, roadmap_id: i64) -> i64 {
    let response = post(
        app.router(),
        &format!("/api/v1/learner/roadmap/{roadmap_id}/enroll"),
        Some(learner),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn set_progress(
    app: &common::TestApp,
    learner: &str,
    enrollment_id: i64,
    progress: serde_json::Value,
) -> axum::http::Response<axum::body::Body> {
    put_json(
        app.router(),
        &format!("/api/v1/learner/enrollment/{enrollment_id}/progress"),
        Some(learner),
        serde_json::json!({ "progress": progress }),
    )
    .await
}

async fn claim(
    app: &common::TestApp,
    learner: &str,
    roadmap_id: i64,
) -> axum::http::Response<axum::body::Body> {
    post(
        app.router(),
        &format!("/api/v1/learner/roadmap/{roadmap_id}/claim-certificate"),
        Some(learner),
    )
    .await
}

// ---------------------------------------------------------------------------
// End-to-end
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn learner_completes_roadmap_and_claims_once(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let learner = wallet(100);

    let roadmap_id = create_roadmap(&app, &expert, "Solidity").await;
    assert_eq!(add_step(&app, &expert, roadmap_id, "Basics").await["order"], 0);
    assert_eq!(add_step(&app, &expert, roadmap_id, "Tokens").await["order"], 1);

    let response = post(
        app.router(),
        &format!("/api/v1/learner/roadmap/{roadmap_id}/enroll"),
        Some(&learner),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let enrollment = body_json(response).await;
    assert_eq!(enrollment["progress"], 0);
    let enrollment_id = enrollment["id"].as_i64().unwrap();

    let response = set_progress(&app, &learner, enrollment_id, serde_json::json!(100)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["progress"], 100);

    let response = claim(&app, &learner, roadmap_id).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Certificate claimed successfully");
    assert_eq!(json["roadmap_id"], roadmap_id);
    let tx_hash = json["tx_hash"].as_str().unwrap().to_string();
    assert!(tx_hash.starts_with("0x"));

    let response = claim(&app, &learner, roadmap_id).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "You have already claimed a certificate for this roadmap"
    );

    let response = get(app.router(), "/api/v1/learner/certificates", Some(&learner)).await;
    let certificates = body_json(response).await;
    assert_eq!(certificates.as_array().unwrap().len(), 1);
    assert_eq!(certificates[0]["tx_hash"], tx_hash.as_str());
    assert_eq!(certificates[0]["roadmap_id"], roadmap_id);
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn browse_lists_every_experts_roadmaps_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = seed_expert(&pool, 1).await;
    let bob = seed_expert(&pool, 2).await;
    let older = create_roadmap(&app, &alice, "Rust").await;
    let newer = create_roadmap(&app, &bob, "Go").await;

    let response = get(app.router(), "/api/v1/learner/roadmaps", Some(&wallet(100))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["id"], newer);
    assert_eq!(json[0]["expert"]["wallet_address"], bob);
    assert_eq!(json[1]["id"], older);
    assert_eq!(json[1]["step_count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn view_missing_roadmap_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app.router(), "/api/v1/learner/roadmap/999999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_roadmap_id_returns_json_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.router(), "/api/v1/learner/roadmap/abc", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].is_string());

    let response =
        post(app.router(), "/api/v1/learner/roadmap/abc/enroll", Some(&wallet(100))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Enrollment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn double_enroll_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let learner = wallet(100);
    let roadmap_id = create_roadmap(&app, &expert, "Rust").await;
    enroll(&app, &learner, roadmap_id).await;

    let response = post(
        app.router(),
        &format!("/api/v1/learner/roadmap/{roadmap_id}/enroll"),
        Some(&learner),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Already enrolled in this roadmap");

    let response = get(app.router(), "/api/v1/learner/enrollments", Some(&learner)).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn enroll_in_missing_roadmap_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post(
        app.router(),
        "/api/v1/learner/roadmap/999999/enroll",
        Some(&wallet(100)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_enrollments_nests_roadmap_summary(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let learner = wallet(100);
    let roadmap_id = create_roadmap(&app, &expert, "Rust").await;
    add_step(&app, &expert, roadmap_id, "Ownership").await;
    let enrollment_id = enroll(&app, &learner, roadmap_id).await;

    let response = get(app.router(), "/api/v1/learner/enrollments", Some(&learner)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["id"], enrollment_id);
    assert_eq!(json[0]["progress"], 0);
    assert_eq!(json[0]["roadmap"]["id"], roadmap_id);
    assert_eq!(json[0]["roadmap"]["title"], "Rust");
    assert_eq!(json[0]["roadmap"]["step_count"], 1);
    assert_eq!(json[0]["roadmap"]["expert"]["wallet_address"], expert);
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn progress_must_be_integer_between_0_and_100(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let learner = wallet(100);
    let roadmap_id = create_roadmap(&app, &expert, "Rust").await;
    let enrollment_id = enroll(&app, &learner, roadmap_id).await;

    for bad in [
        serde_json::json!(-1),
        serde_json::json!(101),
        serde_json::json!(50.5),
        serde_json::json!("50"),
        serde_json::json!(true),
        serde_json::Value::Null,
    ] {
        let response = set_progress(&app, &learner, enrollment_id, bad.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "accepted {bad}");
        assert_eq!(
            body_json(response).await["error"],
            "Progress must be a number between 0 and 100"
        );
    }

    for good in [100, 0, 42] {
        let response =
            set_progress(&app, &learner, enrollment_id, serde_json::json!(good)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["progress"], good);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn progress_body_must_be_a_json_object(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let learner = wallet(100);
    let roadmap_id = create_roadmap(&app, &expert, "Rust").await;
    let enrollment_id = enroll(&app, &learner, roadmap_id).await;
    let uri = format!("/api/v1/learner/enrollment/{enrollment_id}/progress");

    for body in ["[50]", r#"{"progress":50"#, "50"] {
        let response =
            send_raw(app.router(), Method::PUT, &uri, Some(&learner), Some(body.to_string())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "accepted {body}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json["error"].is_string());
    }

    let response = get(app.router(), "/api/v1/learner/enrollments", Some(&learner)).await;
    assert_eq!(body_json(response).await[0]["progress"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn progress_on_someone_elses_enrollment_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let roadmap_id = create_roadmap(&app, &expert, "Rust").await;
    let enrollment_id = enroll(&app, &wallet(100), roadmap_id).await;

    let response = set_progress(&app, &wallet(101), enrollment_id, serde_json::json!(50)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Certificates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn claim_without_enrollment_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let roadmap_id = create_roadmap(&app, &expert, "Rust").await;

    let response = claim(&app, &wallet(100), roadmap_id).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "You are not enrolled in this roadmap"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn claim_before_completion_reports_progress(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let learner = wallet(100);
    let roadmap_id = create_roadmap(&app, &expert, "Rust").await;
    let enrollment_id = enroll(&app, &learner, roadmap_id).await;
    set_progress(&app, &learner, enrollment_id, serde_json::json!(99)).await;

    let response = claim(&app, &learner, roadmap_id).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["current_progress"], 99);
    assert_eq!(
        json["error"],
        "You must complete 100% of the roadmap to claim a certificate"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn failed_mint_releases_reservation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let learner = wallet(100);
    let roadmap_id = create_roadmap(&app, &expert, "Rust").await;
    let enrollment_id = enroll(&app, &learner, roadmap_id).await;
    set_progress(&app, &learner, enrollment_id, serde_json::json!(100)).await;
    app.settle_mints().await;

    app.nft.set_failing(true);
    let response = claim(&app, &learner, roadmap_id).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Failed to mint certificate NFT");

    let user = UserRepo::find_by_wallet(&pool, &learner).await.unwrap().unwrap();
    assert!(CertificateRepo::find_for_learner(&pool, user.id, roadmap_id)
        .await
        .unwrap()
        .is_none());

    app.nft.set_failing(false);
    let response = claim(&app, &learner, roadmap_id).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn completion_already_on_chain_counts_as_claimed(pool: PgPool) {
    use roadmapdao_nft::NftService;

    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let learner = wallet(100);
    let roadmap_id = create_roadmap(&app, &expert, "Rust").await;
    let enrollment_id = enroll(&app, &learner, roadmap_id).await;
    set_progress(&app, &learner, enrollment_id, serde_json::json!(100)).await;

    app.nft
        .mint_completion_certificate(&learner, &roadmap_id.to_string())
        .await
        .unwrap();

    let response = claim(&app, &learner, roadmap_id).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "You have already claimed a certificate for this roadmap"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn certificates_list_is_scoped_to_caller(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let expert = seed_expert(&pool, 1).await;
    let learner = wallet(100);
    let roadmap_id = create_roadmap(&app, &expert, "Rust").await;
    let enrollment_id = enroll(&app, &learner, roadmap_id).await;
    set_progress(&app, &learner, enrollment_id, serde_json::json!(100)).await;
    claim(&app, &learner, roadmap_id).await;

    let response = get(app.router(), "/api/v1/learner/certificates", Some(&wallet(101))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}
