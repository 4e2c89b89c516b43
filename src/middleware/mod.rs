//! Extractors for authentication and authorization.
//!
//! - [`auth`]: [`AuthUser`](auth::AuthUser), the bearer-token extractor
//! - [`role`]: [`authorize`](role::authorize) and the role-gated extractors
//!
//! # Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `AuthUser` verifies the token into an identity (401 on failure)
//! 3. A role extractor checks the identity's role (403 on mismatch)
//! 4. The handler runs and applies any ownership rule
//!
//! ```ignore
//! use crate::middleware::role::RequireMember;
//!
//! async fn get_class(RequireMember(auth_user): RequireMember) -> impl IntoResponse {
//!     // teachers and students reach here
//! }
//! ```

pub mod auth;
pub mod role;
