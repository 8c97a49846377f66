//! Roadmap NFT service interface and implementations.
//!
//! The backend never signs transactions itself. It talks to an
//! [`NftService`], which is one of:
//!
//! - [`DisabledNft`] -- minting turned off; ownership mints are skipped and
//!   certificate claims fail.
//! - [`InMemoryNft`] -- deterministic fake chain for development and tests.
//! - [`HttpMintRelay`] -- HTTP client for a relay process that holds the
//!   minter key and submits contract calls.

use std::sync::Arc;

use async_trait::async_trait;

pub mod config;
pub mod disabled;
pub mod memory;
pub mod outcome;
pub mod relay;

pub use config::{NftConfig, NftMode};
pub use disabled::DisabledNft;
pub use memory::InMemoryNft;
pub use outcome::MintOutcome;
pub use relay::HttpMintRelay;

/// Transaction hash returned by a confirmed mint.
pub type TxHash = String;

/// Errors from an NFT service call.
#[derive(Debug, thiserror::Error)]
pub enum NftError {
    /// Minting is not configured for this deployment.
    #[error("NFT minting is disabled")]
    Disabled,

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Mint relay request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The relay returned a non-2xx status code.
    #[error("Mint relay error ({status}): {body}")]
    Relay {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The contract refused the mint (e.g. certificate already issued).
    #[error("Mint rejected: {0}")]
    Rejected(String),
}

/// Capabilities the backend consumes from the roadmap NFT contract.
///
/// Roadmap ids are passed as strings because that is how the contract keys
/// them.
#[async_trait]
pub trait NftService: Send + Sync {
    /// Mint the ownership token of a new roadmap to its expert.
    async fn mint_ownership(&self, owner_address: &str, roadmap_id: &str)
        -> Result<TxHash, NftError>;

    /// Mint a completion certificate to a learner.
    async fn mint_completion_certificate(
        &self,
        learner_address: &str,
        roadmap_id: &str,
    ) -> Result<TxHash, NftError>;

    /// Whether the learner already holds a completion certificate.
    async fn has_completed_roadmap(
        &self,
        learner_address: &str,
        roadmap_id: &str,
    ) -> Result<bool, NftError>;
}

/// Metadata URI attached to a roadmap ownership token.
pub fn ownership_metadata_uri(roadmap_id: &str) -> String {
    format!("ipfs://roadmap/{roadmap_id}")
}

/// Metadata URI attached to a completion certificate.
pub fn completion_metadata_uri(roadmap_id: &str, learner_address: &str) -> String {
    format!("ipfs://completion/{roadmap_id}/{learner_address}")
}

/// Build the service selected by `config`.
pub fn build_service(config: &NftConfig) -> Result<Arc<dyn NftService>, NftError> {
    let service: Arc<dyn NftService> = match config.mode {
        NftMode::Disabled => Arc::new(DisabledNft),
        NftMode::Memory => Arc::new(InMemoryNft::new()),
        NftMode::Relay => Arc::new(HttpMintRelay::from_config(config)?),
    };
    tracing::info!(mode = %config.mode, "NFT service configured");
    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_uris_follow_contract_convention() {
        assert_eq!(ownership_metadata_uri("12"), "ipfs://roadmap/12");
        assert_eq!(
            completion_metadata_uri("12", "0xabc"),
            "ipfs://completion/12/0xabc"
        );
    }
}
