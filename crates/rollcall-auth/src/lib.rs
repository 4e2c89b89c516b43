//! # Rollcall Auth
//!
//! Identity types and the stateless token codec.
//!
//! - [`claims`]: JWT [`Claims`] and the per-request [`Identity`]
//! - [`jwt`]: [`issue_token`], [`verify_token`], [`resolve_identity`]

pub mod claims;
pub mod jwt;

pub use claims::{Claims, Identity};
pub use jwt::{issue_token, resolve_identity, verify_token};
