use serde::{Deserialize, Deserializer};

/// Trims and lower-cases an email so validation, storage and lookup all see
/// the same string.
pub fn deserialize_email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_email(&raw))
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
