//! Password hashing and verification with bcrypt.
//!
//! Hashes are salted by bcrypt itself; only the hash is ever stored.

use std::sync::OnceLock;

use bcrypt::{hash, verify};

use crate::errors::AppError;

const DUMMY_PASSWORD: &str = "rollcall-no-such-account";
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal_error(format!("Failed to verify password: {}", e)))
}

/// A hash to verify against when the account does not exist, so a login for
/// an unknown email costs the same as one with a wrong password. The result
/// of that verification is always discarded.
///
/// Computed once, at the first caller's cost.
pub fn dummy_hash(cost: u32) -> Result<&'static str, AppError> {
    if let Some(hashed) = DUMMY_HASH.get() {
        return Ok(hashed);
    }
    let hashed = hash_password_with_cost(DUMMY_PASSWORD, cost)?;
    Ok(DUMMY_HASH.get_or_init(|| hashed))
}
