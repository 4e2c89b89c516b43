//! Token codec: signs and verifies identity assertions with a shared secret.
//!
//! Tokens are HS256 JWTs. Verification is pure: no lookups, no revocation
//! list. A token that verifies was issued with the configured secret, so its
//! claims are trusted verbatim.
//!
//! When [`JwtConfig::access_token_expiry`] is set, tokens carry an `exp`
//! claim and verification requires it. When it is unset, tokens never
//! expire; an `exp` claim is still honoured if a token happens to carry one.
//!
//! # Example
//!
//! ```ignore
//! use rollcall_auth::{Identity, issue_token, resolve_identity};
//!
//! let token = issue_token(&Identity::new(user_id, Role::Teacher), &config)?;
//! let identity = resolve_identity(&token, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use rollcall_config::JwtConfig;
use rollcall_core::AppError;

use crate::claims::{Claims, Identity};

pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// Issues a session token for `identity`.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(identity: &Identity, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = jwt_config
        .access_token_expiry
        .map(|seconds| now + seconds as usize);

    let claims = Claims {
        sub: identity.user_id,
        role: identity.role,
        iat: now,
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies a token's signature and expiry and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, signed with a
/// different secret, expired, or missing a required claim.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation(jwt_config),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(INVALID_TOKEN.to_string()))
}

/// Verifies a token and returns the identity it asserts.
pub fn resolve_identity(token: &str, jwt_config: &JwtConfig) -> Result<Identity, AppError> {
    verify_token(token, jwt_config).map(Identity::from)
}

fn validation(jwt_config: &JwtConfig) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    if jwt_config.access_token_expiry.is_some() {
        validation.set_required_spec_claims(&["exp"]);
    } else {
        validation.required_spec_claims.clear();
    }
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_models::Role;
    use uuid::Uuid;

    fn config(expiry: Option<i64>) -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: expiry,
        }
    }

    fn status(err: &AppError) -> u16 {
        err.status.as_u16()
    }

    #[test]
    fn test_token_resolves_to_issued_identity() {
        let config = config(None);
        for role in [Role::Teacher, Role::Student] {
            let identity = Identity::new(Uuid::new_v4(), role);
            let token = issue_token(&identity, &config).unwrap();
            assert_eq!(resolve_identity(&token, &config).unwrap(), identity);
        }
    }

    #[test]
    fn test_token_without_expiry_has_no_exp_claim() {
        let config = config(None);
        let token = issue_token(&Identity::new(Uuid::new_v4(), Role::Student), &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn test_token_with_expiry_has_exp_claim() {
        let config = config(Some(3600));
        let token = issue_token(&Identity::new(Uuid::new_v4(), Role::Teacher), &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.exp, Some(claims.iat + 3600));
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let token = issue_token(&Identity::new(Uuid::new_v4(), Role::Teacher), &config(None))
            .unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: None,
        };

        let err = verify_token(&token, &wrong_config).unwrap_err();
        assert_eq!(status(&err), 401);
    }

    #[test]
    fn test_verify_token_garbage() {
        let config = config(None);
        for token in ["", "invalid-token", "a.b.c"] {
            let err = verify_token(token, &config).unwrap_err();
            assert_eq!(status(&err), 401);
        }
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = config(Some(60));
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: Role::Student,
            iat: now - 7200,
            exp: Some(now - 3600),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_non_expiring_token_rejected_once_expiry_is_required() {
        let token = issue_token(&Identity::new(Uuid::new_v4(), Role::Student), &config(None))
            .unwrap();
        assert!(verify_token(&token, &config(Some(3600))).is_err());
    }

    #[test]
    fn test_tampered_role_is_rejected() {
        let config = config(None);
        let token = issue_token(&Identity::new(Uuid::new_v4(), Role::Student), &config).unwrap();
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        let forged = Claims {
            sub: Uuid::new_v4(),
            role: Role::Teacher,
            iat: 0,
            exp: None,
        };
        let forged_token = encode(
            &Header::new(Algorithm::HS256),
            &forged,
            &EncodingKey::from_secret(b"attacker-secret"),
        )
        .unwrap();
        parts[1] = forged_token.split('.').nth(1).unwrap().to_string();

        assert!(verify_token(&parts.join("."), &config).is_err());
    }
}
