//! Role extractors.
//!
//! Each extractor wraps [`WalletIdentity`], resolves the wallet to a user row
//! and rejects callers whose role does not match the route namespace.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use roadmapdao_core::error::CoreError;
use roadmapdao_core::types::DbId;
use roadmapdao_db::repositories::UserRepo;

use super::auth::WalletIdentity;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a provisioned expert.
///
/// Experts are never created from a request; an unknown wallet is rejected
/// with 401 and a known non-expert with 403.
///
/// ```ignore
/// async fn expert_only(expert: ExpertUser) -> AppResult<Json<()>> {
///     tracing::info!(expert_id = expert.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ExpertUser {
    pub id: DbId,
    pub wallet_address: String,
}

impl FromRequestParts<AppState> for ExpertUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = WalletIdentity::from_request_parts(parts, state).await?;
        let user = UserRepo::find_by_wallet(&state.pool, &identity.wallet_address)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Unknown wallet address".into()))
            })?;

        if !user.is_expert {
            return Err(AppError::Core(CoreError::Forbidden(
                "Expert access required".into(),
            )));
        }

        Ok(ExpertUser {
            id: user.id,
            wallet_address: user.wallet_address,
        })
    }
}

/// Requires a learner, provisioning one on the first request from a wallet.
#[derive(Debug, Clone)]
pub struct LearnerUser {
    pub id: DbId,
    pub wallet_address: String,
}

impl FromRequestParts<AppState> for LearnerUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = WalletIdentity::from_request_parts(parts, state).await?;
        let user = UserRepo::get_or_create_learner(&state.pool, &identity.wallet_address).await?;

        if user.is_expert {
            return Err(AppError::Core(CoreError::Forbidden(
                "Learner access required".into(),
            )));
        }

        Ok(LearnerUser {
            id: user.id,
            wallet_address: user.wallet_address,
        })
    }
}
