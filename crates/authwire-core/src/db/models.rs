// User record as returned by the user store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user known to the application.
///
/// Accounts created through an OAuth provider have no `password`; those can
/// never sign in through the credentials path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unique key for lookups. [`User::new`] lowercases it; records loaded
    /// from a store keep whatever case the store holds.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Stored password hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Application-specific columns (role, timestamps, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: email.into().to_lowercase(),
            email_verified: None,
            image: None,
            password: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password = Some(hash.into());
        self
    }

    /// The stored hash, if the account has a usable one.
    pub fn password_hash(&self) -> Option<&str> {
        self.password.as_deref().filter(|h| !h.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases_email() {
        let user = User::new("u1", "Alice@Example.COM");
        assert_eq!(user.email, "alice@example.com");
        assert!(user.password_hash().is_none());
    }

    #[test]
    fn test_empty_hash_is_not_usable() {
        let user = User::new("u1", "a@x.com").with_password_hash("");
        assert!(user.password_hash().is_none());
    }

    #[test]
    fn test_serde_shape() {
        let user = User::new("u1", "a@x.com").with_name("Alice");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({"id": "u1", "name": "Alice", "email": "a@x.com"}));

        let parsed: User = serde_json::from_value(serde_json::json!({
            "id": "u2",
            "email": "b@x.com",
            "password": "hash",
            "role": "ADMIN"
        }))
        .unwrap();
        assert_eq!(parsed.password_hash(), Some("hash"));
        assert_eq!(parsed.extra["role"], "ADMIN");
    }
}
