//! In-process stand-in for the roadmap NFT contract.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

use crate::{completion_metadata_uri, ownership_metadata_uri, NftError, NftService, TxHash};

#[derive(Default)]
struct Ledger {
    /// roadmap id -> owner address.
    owners: HashMap<String, String>,
    /// (roadmap id, learner address).
    completions: HashSet<(String, String)>,
    /// Bumped per mint so hashes stay unique across re-mints after a reset.
    nonce: u64,
}

/// Deterministic fake chain.
///
/// Enforces the same uniqueness the contract does (one ownership token per
/// roadmap, one certificate per learner and roadmap). Transaction hashes are
/// SHA-256 digests of the call, so they have the on-chain shape.
#[derive(Default)]
pub struct InMemoryNft {
    ledger: Mutex<Ledger>,
    failing: AtomicBool,
}

impl InMemoryNft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent mint fail with [`NftError::Rejected`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Owner recorded for a roadmap's ownership token.
    pub async fn owner_of(&self, roadmap_id: &str) -> Option<String> {
        self.ledger.lock().await.owners.get(roadmap_id).cloned()
    }

    fn check_failing(&self) -> Result<(), NftError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NftError::Rejected("simulated chain failure".into()));
        }
        Ok(())
    }

    fn tx_hash(metadata_uri: &str, recipient: &str, nonce: u64) -> TxHash {
        let digest = Sha256::digest(format!("{metadata_uri}|{recipient}|{nonce}").as_bytes());
        format!("0x{digest:x}")
    }
}

#[async_trait]
impl NftService for InMemoryNft {
    async fn mint_ownership(&self, owner_address: &str, roadmap_id: &str) -> Result<TxHash, NftError> {
        self.check_failing()?;
        let mut ledger = self.ledger.lock().await;
        if ledger.owners.contains_key(roadmap_id) {
            return Err(NftError::Rejected(format!(
                "ownership of roadmap {roadmap_id} already minted"
            )));
        }
        ledger.nonce += 1;
        ledger
            .owners
            .insert(roadmap_id.to_string(), owner_address.to_string());
        let tx = Self::tx_hash(&ownership_metadata_uri(roadmap_id), owner_address, ledger.nonce);
        tracing::debug!(roadmap_id, tx_hash = %tx, "In-memory ownership mint");
        Ok(tx)
    }

    async fn mint_completion_certificate(
        &self,
        learner_address: &str,
        roadmap_id: &str,
    ) -> Result<TxHash, NftError> {
        self.check_failing()?;
        let mut ledger = self.ledger.lock().await;
        let key = (roadmap_id.to_string(), learner_address.to_string());
        if ledger.completions.contains(&key) {
            return Err(NftError::Rejected(format!(
                "certificate for roadmap {roadmap_id} already issued"
            )));
        }
        ledger.nonce += 1;
        ledger.completions.insert(key);
        let uri = completion_metadata_uri(roadmap_id, learner_address);
        let tx = Self::tx_hash(&uri, learner_address, ledger.nonce);
        tracing::debug!(roadmap_id, tx_hash = %tx, "In-memory certificate mint");
        Ok(tx)
    }

    async fn has_completed_roadmap(
        &self,
        learner_address: &str,
        roadmap_id: &str,
    ) -> Result<bool, NftError> {
        let ledger = self.ledger.lock().await;
        Ok(ledger
            .completions
            .contains(&(roadmap_id.to_string(), learner_address.to_string())))
    }
}
