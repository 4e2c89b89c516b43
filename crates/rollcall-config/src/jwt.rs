//! JWT signing configuration.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`: HS256 signing secret (required, no fallback)
//! - `JWT_ACCESS_EXPIRY`: token lifetime in seconds (optional; when unset,
//!   issued tokens carry no `exp` claim and never expire)

use anyhow::{Context, bail};
use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: Option<i64>,
}

impl JwtConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").context("JWT_SECRET must be set")?;
        if secret.trim().is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        let access_token_expiry = match lookup("JWT_ACCESS_EXPIRY") {
            Some(raw) => {
                let seconds: i64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("JWT_ACCESS_EXPIRY is not a number: {raw}"))?;
                if seconds <= 0 {
                    bail!("JWT_ACCESS_EXPIRY must be positive");
                }
                Some(seconds)
            }
            None => None,
        };

        Ok(Self {
            secret,
            access_token_expiry,
        })
    }
}
