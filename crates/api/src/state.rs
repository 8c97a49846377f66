use std::sync::Arc;

use roadmapdao_nft::NftService;
use tokio_util::task::TaskTracker;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: roadmapdao_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Roadmap NFT contract client.
    pub nft: Arc<dyn NftService>,
    /// Background ownership mints; drained on shutdown.
    pub mint_tasks: TaskTracker,
}
