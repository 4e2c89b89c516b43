//! The closed set of user roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// A user's role. Fixed at signup.
///
/// Serialized as `"teacher"` / `"student"` both on the wire and in the
/// `user_role` Postgres enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), r#""teacher""#);
        assert_eq!(
            serde_json::from_str::<Role>(r#""student""#).unwrap(),
            Role::Student
        );
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(serde_json::from_str::<Role>(r#""admin""#).is_err());
        assert!(serde_json::from_str::<Role>(r#""Teacher""#).is_err());
        assert!("principal".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [Role::Teacher, Role::Student] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
