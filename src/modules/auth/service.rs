use anyhow::anyhow;
use rollcall_auth::{Identity, issue_token};
use rollcall_config::{JwtConfig, PasswordConfig};
use rollcall_core::serde::normalize_email;
use rollcall_core::{AppError, dummy_hash, hash_password_with_cost, verify_password};
use rollcall_db::{ClassroomStore, StoreError};
use rollcall_models::{NewUser, User};
use tracing::{info, instrument};
use validator::Validate;

use crate::validator::validation_error;

use super::model::{LoginRequest, LoginResponse, SignupRequest};

pub const EMAIL_TAKEN: &str = "Email already exists";
pub const USER_NOT_FOUND: &str = "User not found";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(store, password_config, dto), fields(email = %dto.email, role = %dto.role))]
    pub async fn signup(
        store: &dyn ClassroomStore,
        password_config: &PasswordConfig,
        dto: SignupRequest,
    ) -> Result<User, AppError> {
        let dto = SignupRequest {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            ..dto
        };
        dto.validate().map_err(|errors| validation_error(&errors))?;

        let password_hash = hash_password_with_cost(&dto.password, password_config.bcrypt_cost)?;

        let user = store
            .create_user(NewUser {
                name: dto.name,
                email: dto.email,
                password_hash,
                role: dto.role,
            })
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => AppError::conflict(anyhow!(EMAIL_TAKEN)),
                other => AppError::internal(other),
            })?;

        info!(user_id = %user.id, "User signed up");
        Ok(user)
    }

    /// Unknown email and wrong password fail identically, and both pay for
    /// one bcrypt verification.
    #[instrument(skip(store, jwt_config, password_config, dto), fields(email = %dto.email))]
    pub async fn login(
        store: &dyn ClassroomStore,
        jwt_config: &JwtConfig,
        password_config: &PasswordConfig,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let Some(credentials) = store
            .find_credentials_by_email(&normalize_email(&dto.email))
            .await?
        else {
            verify_password(&dto.password, dummy_hash(password_config.bcrypt_cost)?)?;
            return Err(AppError::invalid_credentials());
        };

        if !verify_password(&dto.password, &credentials.password)? {
            return Err(AppError::invalid_credentials());
        }

        let token = issue_token(&Identity::new(credentials.id, credentials.role), jwt_config)?;

        Ok(LoginResponse { token })
    }

    #[instrument(skip(store))]
    pub async fn who_am_i(
        store: &dyn ClassroomStore,
        identity: &Identity,
    ) -> Result<User, AppError> {
        store
            .find_user(identity.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))
    }
}
