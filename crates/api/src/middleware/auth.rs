//! Wallet-based identity extractor for Axum handlers.
//!
//! The caller's wallet address is sent as `Authorization: Bearer <address>`.
//! The address is only checked for shape; no wallet signature is verified.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use roadmapdao_core::error::CoreError;
use roadmapdao_core::wallet::normalize_wallet_address;

use crate::error::AppError;
use crate::state::AppState;

/// A caller identified by the wallet address in the `Authorization` header.
///
/// This does not touch the database; see [`super::roles`] for extractors that
/// resolve the wallet to a user and enforce a role.
#[derive(Debug, Clone)]
pub struct WalletIdentity {
    /// Lowercase `0x`-prefixed address.
    pub wallet_address: String,
}

impl FromRequestParts<AppState> for WalletIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let address = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <wallet address>".into(),
            ))
        })?;

        Ok(WalletIdentity {
            wallet_address: normalize_wallet_address(address)?,
        })
    }
}
