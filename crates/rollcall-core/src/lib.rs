//! # Rollcall Core
//!
//! Foundational types shared by every Rollcall crate:
//!
//! - [`errors`]: the [`AppError`] type and its HTTP rendering
//! - [`password`]: bcrypt hashing and verification
//! - [`serde`]: deserializers that normalize request fields
//! - [`response`]: the `{"success": true, "data": ...}` envelope
//!
//! # Example
//!
//! ```ignore
//! use rollcall_core::{AppError, hash_password_with_cost};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Class not found"));
//! let hash = hash_password_with_cost("secure_password", 12)?;
//! ```

pub mod errors;
pub mod password;
pub mod response;
pub mod serde;

pub use errors::AppError;
pub use password::{dummy_hash, hash_password_with_cost, verify_password};
pub use response::ApiResponse;
