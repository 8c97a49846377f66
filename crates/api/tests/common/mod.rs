#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tokio_util::task::TaskTracker;
use tower::ServiceExt;

use roadmapdao_api::config::ServerConfig;
use roadmapdao_api::router::build_app_router;
use roadmapdao_api::state::AppState;
use roadmapdao_db::repositories::UserRepo;
use roadmapdao_nft::{InMemoryNft, NftConfig, NftMode, NftService};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        expert_wallets: Vec::new(),
        nft: NftConfig {
            mode: NftMode::Memory,
            ..NftConfig::default()
        },
    }
}

/// A router plus the handles tests need to inspect side effects.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub nft: Arc<InMemoryNft>,
}

impl TestApp {
    /// A fresh clone of the router for a single `oneshot` request.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Wait for every background ownership mint spawned so far.
    pub async fn settle_mints(&self) {
        self.state.mint_tasks.close();
        self.state.mint_tasks.wait().await;
        self.state.mint_tasks.reopen();
    }
}

/// Build the full application with the in-memory NFT service.
pub fn build_test_app(pool: PgPool) -> TestApp {
    let nft = Arc::new(InMemoryNft::new());
    let service: Arc<dyn NftService> = nft.clone();
    let state = build_test_state(pool, service);
    let router = build_app_router(state.clone(), &test_config());
    TestApp { router, state, nft }
}

/// Build an `AppState` around an arbitrary NFT service.
pub fn build_test_state(pool: PgPool, nft: Arc<dyn NftService>) -> AppState {
    AppState {
        pool,
        config: Arc::new(test_config()),
        nft,
        mint_tasks: TaskTracker::new(),
    }
}

/// Deterministic wallet address for test user `n`.
pub fn wallet(n: u64) -> String {
    format!("0x{n:040x}")
}

/// Provision `wallet(n)` as an expert and return the address.
pub async fn seed_expert(pool: &PgPool, n: u64) -> String {
    let address = wallet(n);
    UserRepo::upsert_expert(pool, &address).await.unwrap();
    address
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    wallet: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    send_raw(app, method, uri, wallet, body.map(|json| json.to_string())).await
}

/// Send `body` verbatim as `application/json`, well-formed or not.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    wallet: Option<&str>,
    body: Option<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(wallet) = wallet {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {wallet}"));
    }
    let request = match body {
        Some(text) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(text))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, wallet: Option<&str>) -> Response<Body> {
    send(app, Method::GET, uri, wallet, None).await
}

pub async fn post(app: Router, uri: &str, wallet: Option<&str>) -> Response<Body> {
    send(app, Method::POST, uri, wallet, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    wallet: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, wallet, Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    wallet: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, wallet, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, wallet: Option<&str>) -> Response<Body> {
    send(app, Method::DELETE, uri, wallet, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a roadmap as `expert` and return its id.
pub async fn create_roadmap(app: &TestApp, expert: &str, title: &str) -> i64 {
    let response = post_json(
        app.router(),
        "/api/v1/expert/roadmap",
        Some(expert),
        serde_json::json!({"title": title, "description": format!("{title} description")}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Add a step to `roadmap_id` and return the created step JSON.
pub async fn add_step(app: &TestApp, expert: &str, roadmap_id: i64, title: &str) -> serde_json::Value {
    let response = post_json(
        app.router(),
        &format!("/api/v1/expert/roadmap/{roadmap_id}/step"),
        Some(expert),
        serde_json::json!({"title": title, "description": format!("{title} description")}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
