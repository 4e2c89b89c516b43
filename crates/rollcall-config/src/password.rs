use std::env;

/// bcrypt's own default work factor.
pub const DEFAULT_BCRYPT_COST: u32 = 12;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

#[derive(Clone, Copy, Debug)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl PasswordConfig {
    /// Reads `BCRYPT_COST`, clamped to the range bcrypt accepts.
    pub fn from_env() -> Self {
        Self::from_value(env::var("BCRYPT_COST").ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let bcrypt_cost = value
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|cost| cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST))
            .unwrap_or(DEFAULT_BCRYPT_COST);

        Self { bcrypt_cost }
    }
}
