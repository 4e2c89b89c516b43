//! # Rollcall Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and optional expiry
//! - [`cors`]: allowed browser origins
//! - [`password`]: bcrypt work factor
//!
//! # Example
//!
//! ```ignore
//! use rollcall_config::{CorsConfig, JwtConfig, PasswordConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let password_config = PasswordConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod password;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use password::PasswordConfig;
