use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which [`NftService`](crate::NftService) implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NftMode {
    Disabled,
    Memory,
    Relay,
}

impl fmt::Display for NftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Disabled => "disabled",
            Self::Memory => "memory",
            Self::Relay => "relay",
        })
    }
}

impl FromStr for NftMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disabled" | "off" | "" => Ok(Self::Disabled),
            "memory" => Ok(Self::Memory),
            "relay" => Ok(Self::Relay),
            other => Err(format!(
                "unknown NFT mode '{other}', expected disabled, memory or relay"
            )),
        }
    }
}

/// NFT service configuration.
#[derive(Debug, Clone)]
pub struct NftConfig {
    pub mode: NftMode,
    /// Base URL of the mint relay, e.g. `http://localhost:8545/relay`.
    pub relay_url: Option<String>,
    /// Bearer token sent to the relay, if it requires one.
    pub relay_token: Option<String>,
    /// Per-request timeout for relay calls (they wait for confirmation).
    pub relay_timeout: Duration,
}

/// Default relay request timeout in seconds.
const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 30;

impl Default for NftConfig {
    fn default() -> Self {
        Self {
            mode: NftMode::Disabled,
            relay_url: None,
            relay_token: None,
            relay_timeout: Duration::from_secs(DEFAULT_RELAY_TIMEOUT_SECS),
        }
    }
}

impl NftConfig {
    /// Load NFT configuration from environment variables.
    ///
    /// | Env Var                  | Required         | Default    |
    /// |--------------------------|------------------|------------|
    /// | `NFT_MODE`               | no               | `disabled` |
    /// | `NFT_RELAY_URL`          | when mode=relay  | --         |
    /// | `NFT_RELAY_TOKEN`        | no               | --         |
    /// | `NFT_RELAY_TIMEOUT_SECS` | no               | `30`       |
    ///
    /// # Panics
    ///
    /// Panics if `NFT_MODE` is unknown, or if mode is `relay` and
    /// `NFT_RELAY_URL` is not set.
    pub fn from_env() -> Self {
        let mode: NftMode = std::env::var("NFT_MODE")
            .unwrap_or_default()
            .parse()
            .unwrap_or_else(|e| panic!("NFT_MODE is invalid: {e}"));

        let relay_url = std::env::var("NFT_RELAY_URL")
            .ok()
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty());
        assert!(
            mode != NftMode::Relay || relay_url.is_some(),
            "NFT_RELAY_URL must be set when NFT_MODE=relay"
        );

        let relay_token = std::env::var("NFT_RELAY_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());

        let relay_timeout_secs: u64 = std::env::var("NFT_RELAY_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_RELAY_TIMEOUT_SECS.to_string())
            .parse()
            .expect("NFT_RELAY_TIMEOUT_SECS must be a valid u64");

        Self {
            mode,
            relay_url,
            relay_token,
            relay_timeout: Duration::from_secs(relay_timeout_secs),
        }
    }
}
