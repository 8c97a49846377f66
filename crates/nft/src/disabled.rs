use async_trait::async_trait;

use crate::{NftError, NftService, TxHash};

/// NFT service used when no minting backend is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNft;

#[async_trait]
impl NftService for DisabledNft {
    async fn mint_ownership(&self, _owner: &str, _roadmap_id: &str) -> Result<TxHash, NftError> {
        Err(NftError::Disabled)
    }

    async fn mint_completion_certificate(
        &self,
        _learner: &str,
        _roadmap_id: &str,
    ) -> Result<TxHash, NftError> {
        Err(NftError::Disabled)
    }

    /// Nothing can have been minted, so nobody has completed anything.
    async fn has_completed_roadmap(&self, _learner: &str, _roadmap_id: &str) -> Result<bool, NftError> {
        Ok(false)
    }
}
