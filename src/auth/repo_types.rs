use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Account role. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Child,
    Adult,
    Parent,
}

impl Role {
    /// Parse a client-supplied role string. Trims and lowercases first,
    /// anything outside the three accepted values is rejected.
    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_lowercase().as_str() {
            "child" => Some(Role::Child),
            "adult" => Some(Role::Adult),
            "parent" => Some(Role::Parent),
            _ => None,
        }
    }
}

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String, // random opaque hex, immutable
    pub email: String, // stored lowercase, unique
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, never exposed in JSON
    pub role: Role,
    pub name: String,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_three_roles() {
        assert_eq!(Role::parse("child"), Some(Role::Child));
        assert_eq!(Role::parse("adult"), Some(Role::Adult));
        assert_eq!(Role::parse("parent"), Some(Role::Parent));
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        assert_eq!(Role::parse("  Parent "), Some(Role::Parent));
        assert_eq!(Role::parse("CHILD"), Some(Role::Child));
    }

    #[test]
    fn parse_rejects_unknown_roles() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Child).unwrap(), "\"child\"");
    }
}
