// user.rs — The User record: who the local actor is.
//
// Same camelCase JSON layout as the reference client's stored user, so an
// existing `krewly_user` value loads unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the user can do in the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// An approved service provider.
    Vendor,
    /// A regular customer. The default for new identities.
    Client,
    /// Can review vendor applications.
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Vendor => write!(f, "vendor"),
            UserRole::Client => write!(f, "client"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vendor" => Ok(UserRole::Vendor),
            "client" => Ok(UserRole::Client),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!(
                "unknown role '{}' (expected vendor, client or admin)",
                other
            )),
        }
    }
}

/// Account standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Pending,
    Active,
    Suspended,
}

/// The signed-in user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh active identity with a generated id.
    pub fn new(email: impl Into<String>, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: format!("user-{}", Uuid::new_v4()),
            email: email.into(),
            first_name: None,
            last_name: None,
            avatar_url: None,
            phone: None,
            role,
            status: UserStatus::Active,
            email_verified: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_is_active_with_generated_id() {
        let user = User::new("tolu@example.com", UserRole::Client);
        assert!(user.id.starts_with("user-"));
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.role, UserRole::Client);
    }

    #[test]
    fn serializes_with_camel_case_layout() {
        let user = User::new("tolu@example.com", UserRole::Client);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"firstName\""));
        assert!(json.contains("\"emailVerified\""));
        assert!(json.contains("\"role\":\"client\""));
        assert!(json.contains("\"status\":\"active\""));
    }

    #[test]
    fn role_parse_round_trip() {
        for role in [UserRole::Vendor, UserRole::Client, UserRole::Admin] {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("superuser".parse::<UserRole>().is_err());
    }

    #[test]
    fn serialization_round_trip() {
        let user = User::new("tolu@example.com", UserRole::Admin);
        let json = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, restored);
    }
}
