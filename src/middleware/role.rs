//! Role-based access control.
//!
//! [`authorize`] is the single predicate every protected route goes through.
//! The extractors generated by [`require_roles!`](crate::require_roles) wrap
//! it so handlers declare their allowed roles in their signature:
//!
//! ```rust,ignore
//! pub async fn create_class(
//!     RequireTeacher(auth_user): RequireTeacher,
//!     // ...
//! ) -> Result<impl IntoResponse, AppError> { /* teachers only */ }
//! ```
//!
//! Ownership rules are not role rules; they live in the services.

use rollcall_auth::Identity;
use rollcall_core::AppError;
use rollcall_models::Role;

pub const UNAUTHORIZED: &str = "Unauthorized";
pub const FORBIDDEN: &str = "Forbidden";

/// Passes `identity` through if its role is in `allowed_roles`.
///
/// No identity is 401; a disallowed role is 403.
pub fn authorize(identity: Option<Identity>, allowed_roles: &[Role]) -> Result<Identity, AppError> {
    let identity = identity.ok_or_else(|| AppError::unauthorized(UNAUTHORIZED.to_string()))?;

    if !allowed_roles.contains(&identity.role) {
        return Err(AppError::forbidden(FORBIDDEN.to_string()));
    }

    Ok(identity)
}

/// Declares an extractor that authenticates the caller and then applies
/// [`authorize`] with the given roles.
#[macro_export]
macro_rules! require_roles {
    ($name:ident, [$($role:expr),+ $(,)?]) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = rollcall_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                use axum::extract::FromRequestParts as _;

                let auth_user =
                    $crate::middleware::auth::AuthUser::from_request_parts(parts, state).await?;

                let identity = $crate::middleware::role::authorize(
                    Some(auth_user.0),
                    &[$($role),+],
                )?;

                Ok($name($crate::middleware::auth::AuthUser(identity)))
            }
        }
    };
}

require_roles!(RequireTeacher, [Role::Teacher]);
require_roles!(RequireStudent, [Role::Student]);
require_roles!(RequireMember, [Role::Teacher, Role::Student]);
