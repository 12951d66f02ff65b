// In-memory user store keyed by lowercase email.
//
// Thread-safe via `tokio::sync::RwLock`. Counts lookups so callers can
// assert that a code path never reached the store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use authwire_core::db::models::User;
use authwire_core::db::user_store::UserLookup;
use authwire_core::error::{AuthwireError, Result};

/// In-memory user store.
///
/// Clones share the same data. Data is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
    lookups: Arc<AtomicUsize>,
}

impl MemoryUserStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users
            .into_iter()
            .map(|u| (u.email.to_lowercase(), u))
            .collect();
        Self {
            users: Arc::new(RwLock::new(map)),
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Insert a user. Fails if the email is already taken.
    pub async fn insert(&self, user: User) -> Result<()> {
        let key = user.email.to_lowercase();
        let mut users = self.users.write().await;
        if users.contains_key(&key) {
            return Err(AuthwireError::Database(format!("duplicate email: {key}")));
        }
        users.insert(key, user);
        Ok(())
    }

    /// Insert or replace a user.
    pub async fn upsert(&self, user: User) {
        let key = user.email.to_lowercase();
        self.users.write().await.insert(key, user);
    }

    /// Remove a user by email, returning it if present.
    pub async fn remove(&self, email: &str) -> Option<User> {
        self.users.write().await.remove(&email.to_lowercase())
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Number of `get_user_by_email` calls served so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Clear all data.
    pub async fn clear(&self) {
        self.users.write().await.clear();
    }
}

#[async_trait]
impl UserLookup for MemoryUserStore {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let user = self.users.read().await.get(&email.to_lowercase()).cloned();
        tracing::trace!(found = user.is_some(), "memory store lookup");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let store = MemoryUserStore::new();
        store
            .insert(User::new("u1", "a@x.com").with_name("Alice"))
            .await
            .unwrap();

        let found = store.get_user_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, "u1");
        assert_eq!(found.name.as_deref(), Some("Alice"));
        assert_eq!(store.lookup_count(), 1);
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let store = MemoryUserStore::with_users([User::new("u1", "a@x.com")]);
        assert!(store.get_user_by_email("A@X.COM").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_missing_user_is_none() {
        let store = MemoryUserStore::new();
        assert!(store.get_user_by_email("nobody@x.com").await.unwrap().is_none());
        assert_eq!(store.lookup_count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_insert_fails() {
        let store = MemoryUserStore::new();
        store.insert(User::new("u1", "a@x.com")).await.unwrap();
        let err = store.insert(User::new("u2", "A@x.com")).await.unwrap_err();
        assert!(matches!(err, AuthwireError::Database(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_upsert_remove_clear() {
        let store = MemoryUserStore::new();
        store.upsert(User::new("u1", "a@x.com")).await;
        store.upsert(User::new("u1", "a@x.com").with_password_hash("h")).await;
        assert_eq!(store.len().await, 1);
        let removed = store.remove("a@x.com").await.unwrap();
        assert_eq!(removed.password_hash(), Some("h"));
        store.upsert(User::new("u2", "b@x.com")).await;
        store.clear().await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryUserStore::new();
        let clone = store.clone();
        clone.upsert(User::new("u1", "a@x.com")).await;
        assert!(store.get_user_by_email("a@x.com").await.unwrap().is_some());
        assert_eq!(clone.lookup_count(), 1);
    }
}
