//! Token claims and the identity they resolve to.

use rollcall_models::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for session tokens.
///
/// - `sub`: user id
/// - `role`: the user's role at login time
/// - `iat`: issued-at timestamp
/// - `exp`: expiry timestamp, absent when tokens are configured not to expire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: Role,
    pub iat: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

/// The verified `{userId, role}` pair for one request. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
        }
    }
}
