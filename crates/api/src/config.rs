use roadmapdao_core::error::CoreError;
use roadmapdao_core::wallet::normalize_wallet_address;
use roadmapdao_nft::NftConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on how long shutdown waits for in-flight mints (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Normalised wallets provisioned as experts at startup.
    pub expert_wallets: Vec<String>,
    /// NFT minting backend.
    pub nft: NftConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                       |
    /// |------------------------|-----------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                     |
    /// | `PORT`                 | `3000`                                        |
    /// | `CORS_ORIGINS`         | `http://localhost:3000,http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                          |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                                          |
    /// | `EXPERT_WALLETS`       | empty                                         |
    ///
    /// NFT settings are read by [`NftConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_list(
            &std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let expert_wallets = parse_expert_wallets(
            &std::env::var("EXPERT_WALLETS").unwrap_or_default(),
        )
        .unwrap_or_else(|e| panic!("EXPERT_WALLETS is invalid: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            expert_wallets,
            nft: NftConfig::from_env(),
        }
    }
}

/// Parse a comma-separated wallet list, normalising each entry.
///
/// Blank entries are ignored and duplicates collapse to one.
pub fn parse_expert_wallets(raw: &str) -> Result<Vec<String>, CoreError> {
    let mut wallets = Vec::new();
    for entry in split_list(raw) {
        let wallet = normalize_wallet_address(&entry)?;
        if !wallets.contains(&wallet) {
            wallets.push(wallet);
        }
    }
    Ok(wallets)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
