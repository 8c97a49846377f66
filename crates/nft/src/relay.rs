//! HTTP client for the mint relay.
//!
//! The relay owns the minter key and submits contract calls, replying once
//! the transaction is confirmed:
//!
//! ```text
//! POST {base}/mint/ownership                   { recipient, roadmap_id, metadata_uri } -> { tx_hash }
//! POST {base}/mint/completion                  { recipient, roadmap_id, metadata_uri } -> { tx_hash }
//! GET  {base}/completions/{roadmap_id}/{addr}  -> { completed }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::NftConfig;
use crate::{completion_metadata_uri, ownership_metadata_uri, NftError, NftService, TxHash};

/// Body of both mint calls.
#[derive(Debug, Serialize)]
struct MintRequest<'a> {
    recipient: &'a str,
    roadmap_id: &'a str,
    metadata_uri: String,
}

#[derive(Debug, Deserialize)]
struct MintResponse {
    tx_hash: Option<TxHash>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    completed: bool,
}

/// [`NftService`] backed by the mint relay.
pub struct HttpMintRelay {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpMintRelay {
    /// Create a relay client.
    ///
    /// * `base_url` - relay root without trailing slash.
    pub fn new(client: reqwest::Client, base_url: String, token: Option<String>) -> Self {
        Self {
            client,
            base_url,
            token,
        }
    }

    /// Build a client from configuration, applying the relay timeout.
    pub fn from_config(config: &NftConfig) -> Result<Self, NftError> {
        let client = reqwest::Client::builder()
            .timeout(config.relay_timeout)
            .build()?;
        let base_url = config.relay_url.clone().unwrap_or_default();
        Ok(Self::new(client, base_url, config.relay_token.clone()))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn mint(&self, path: &str, body: &MintRequest<'_>) -> Result<TxHash, NftError> {
        let request = self
            .client
            .post(format!("{}/{path}", self.base_url))
            .json(body);
        let response = self.authorize(request).send().await?;
        let parsed: MintResponse = Self::parse_response(response).await?;
        parsed
            .tx_hash
            .filter(|tx| !tx.is_empty())
            .ok_or_else(|| NftError::Rejected("relay returned no transaction hash".into()))
    }

    /// Check the response status and deserialize the JSON body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, NftError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NftError::Relay {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl NftService for HttpMintRelay {
    async fn mint_ownership(&self, owner_address: &str, roadmap_id: &str) -> Result<TxHash, NftError> {
        let body = MintRequest {
            recipient: owner_address,
            roadmap_id,
            metadata_uri: ownership_metadata_uri(roadmap_id),
        };
        let tx = self.mint("mint/ownership", &body).await?;
        tracing::info!(roadmap_id, tx_hash = %tx, "Roadmap ownership NFT minted");
        Ok(tx)
    }

    async fn mint_completion_certificate(
        &self,
        learner_address: &str,
        roadmap_id: &str,
    ) -> Result<TxHash, NftError> {
        let body = MintRequest {
            recipient: learner_address,
            roadmap_id,
            metadata_uri: completion_metadata_uri(roadmap_id, learner_address),
        };
        let tx = self.mint("mint/completion", &body).await?;
        tracing::info!(roadmap_id, tx_hash = %tx, "Completion certificate NFT minted");
        Ok(tx)
    }

    async fn has_completed_roadmap(
        &self,
        learner_address: &str,
        roadmap_id: &str,
    ) -> Result<bool, NftError> {
        let request = self.client.get(format!(
            "{}/completions/{roadmap_id}/{learner_address}",
            self.base_url
        ));
        let response = self.authorize(request).send().await?;
        let parsed: CompletionResponse = Self::parse_response(response).await?;
        Ok(parsed.completed)
    }
}
