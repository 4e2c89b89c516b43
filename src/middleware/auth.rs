use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use rollcall_auth::{Identity, resolve_identity};
use rollcall_core::AppError;
use uuid::Uuid;

use crate::state::AppState;

pub const MISSING_TOKEN: &str = "Missing or invalid authorization header";

/// Extractor that verifies the bearer token and yields the caller's identity.
///
/// Rejects with 401 when the header is absent, not a `Bearer` credential,
/// or carries a token that fails verification.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn identity(&self) -> &Identity {
        &self.0
    }

    pub fn user_id(&self) -> Uuid {
        self.0.user_id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::unauthorized(MISSING_TOKEN.to_string()))?;

        let identity = resolve_identity(bearer.token(), &state.jwt_config)?;

        Ok(AuthUser(identity))
    }
}
