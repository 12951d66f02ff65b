// Credentials authorization: email/password in, user or nothing out.

use std::sync::Arc;

use authwire_core::db::models::User;
use authwire_core::db::user_store::UserLookup;
use authwire_core::error::{AuthwireError, Result};

use super::schema::LoginCredentials;
use crate::crypto::{DefaultPasswordVerifier, PasswordVerifier};

/// Decides whether a credentials payload identifies a user.
///
/// Every rejection (bad payload, unknown email, account without a password,
/// wrong password) is the same `Ok(None)`. `Err` only comes from the user
/// store or from an unusable stored hash.
#[derive(Debug, Clone)]
pub struct CredentialsAuthorizer {
    users: Arc<dyn UserLookup>,
    verifier: Arc<dyn PasswordVerifier>,
}

impl CredentialsAuthorizer {
    /// Authorizer backed by `users`, verifying with [`DefaultPasswordVerifier`].
    pub fn new(users: Arc<dyn UserLookup>) -> Self {
        Self {
            users,
            verifier: Arc::new(DefaultPasswordVerifier),
        }
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn PasswordVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub async fn authorize(&self, credentials: &serde_json::Value) -> Result<Option<User>> {
        let login = match LoginCredentials::parse(credentials) {
            Ok(login) => login,
            Err(e) => {
                tracing::debug!(reason = %e, "credentials rejected by schema");
                return Ok(None);
            }
        };

        let LoginCredentials { email, password } = login;
        let user = match self.users.get_user_by_email(&email).await? {
            Some(user) => user,
            None => {
                self.equalize(password).await;
                tracing::debug!("credentials rejected: no matching account");
                return Ok(None);
            }
        };

        let Some(hash) = user.password_hash() else {
            self.equalize(password).await;
            tracing::debug!(user_id = %user.id, "credentials rejected: account has no password");
            return Ok(None);
        };

        if !self.verify(password, hash.to_string()).await? {
            tracing::debug!(user_id = %user.id, "credentials rejected: password mismatch");
            return Ok(None);
        }

        tracing::debug!(user_id = %user.id, "credentials accepted");
        Ok(Some(user))
    }

    // Key derivation is CPU-bound; keep it off the async worker threads.
    async fn verify(&self, password: String, hash: String) -> Result<bool> {
        let verifier = self.verifier.clone();
        tokio::task::spawn_blocking(move || verifier.verify(&password, &hash))
            .await
            .map_err(|e| AuthwireError::Crypto(format!("password verification task failed: {e}")))?
    }

    async fn equalize(&self, password: String) {
        let verifier = self.verifier.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || verifier.equalize(&password)).await {
            tracing::warn!(error = %e, "timing equalization task failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    /// Stores plaintext "hashes" and counts calls.
    #[derive(Debug, Default)]
    struct PlainVerifier {
        verifies: AtomicUsize,
        equalizes: AtomicUsize,
    }

    impl PasswordVerifier for PlainVerifier {
        fn verify(&self, password: &str, hash: &str) -> Result<bool> {
            self.verifies.fetch_add(1, Ordering::SeqCst);
            Ok(password == hash)
        }

        fn equalize(&self, _password: &str) {
            self.equalizes.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Debug, Default)]
    struct OneUser {
        user: Option<User>,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl UserLookup for OneUser {
        async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self.user.clone().filter(|u| u.email == email))
        }
    }

    #[derive(Debug)]
    struct BrokenStore;

    #[async_trait]
    impl UserLookup for BrokenStore {
        async fn get_user_by_email(&self, _email: &str) -> Result<Option<User>> {
            Err(AuthwireError::Database("connection refused".into()))
        }
    }

    fn setup(user: Option<User>) -> (CredentialsAuthorizer, Arc<OneUser>, Arc<PlainVerifier>) {
        let store = Arc::new(OneUser {
            user,
            ..Default::default()
        });
        let verifier = Arc::new(PlainVerifier::default());
        let authorizer = CredentialsAuthorizer::new(store.clone()).with_verifier(verifier.clone());
        (authorizer, store, verifier)
    }

    #[tokio::test]
    async fn test_match_returns_user() {
        let user = User::new("u1", "a@x.com").with_password_hash("secret");
        let (authorizer, _, _) = setup(Some(user.clone()));
        let result = authorizer
            .authorize(&json!({"email": "a@x.com", "password": "secret"}))
            .await
            .unwrap();
        assert_eq!(result, Some(user));
    }

    #[tokio::test]
    async fn test_email_reaches_store_as_given() {
        // Records deserialized from a store keep their original case.
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "email": "Alice@X.com",
            "password": "secret",
        }))
        .unwrap();
        let (authorizer, store, _) = setup(Some(user));

        let result = authorizer
            .authorize(&json!({"email": "Alice@X.com", "password": "secret"}))
            .await
            .unwrap();
        assert_eq!(result.map(|u| u.id), Some("u1".to_string()));

        // An exact-match store decides case sensitivity, not the authorizer.
        let result = authorizer
            .authorize(&json!({"email": "alice@x.com", "password": "secret"}))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_real_bcrypt_hash_with_mixed_case_email() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "email": "Alice@X.com",
            "password": pwhash::bcrypt::hash("secret").unwrap(),
        }))
        .unwrap();
        let store = Arc::new(OneUser {
            user: Some(user),
            ..Default::default()
        });
        let authorizer = CredentialsAuthorizer::new(store);
        let result = authorizer
            .authorize(&json!({"email": "Alice@X.com", "password": "secret"}))
            .await
            .unwrap();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_truncated_bcrypt_hash_propagates() {
        let store = Arc::new(OneUser {
            user: Some(User::new("u1", "a@x.com").with_password_hash("$2b$10$short")),
            ..Default::default()
        });
        let authorizer = CredentialsAuthorizer::new(store);
        let err = authorizer
            .authorize(&json!({"email": "a@x.com", "password": "secret"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthwireError::Crypto(_)));
    }

    #[tokio::test]
    async fn test_schema_failure_skips_lookup() {
        let (authorizer, store, verifier) = setup(None);
        let result = authorizer
            .authorize(&json!({"email": "not-an-email", "password": "x"}))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
        assert_eq!(verifier.verifies.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_user_equalizes_timing() {
        let (authorizer, store, verifier) = setup(None);
        let result = authorizer
            .authorize(&json!({"email": "a@x.com", "password": "secret"}))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.lookups.load(Ordering::SeqCst), 1);
        assert_eq!(verifier.equalizes.load(Ordering::SeqCst), 1);
        assert_eq!(verifier.verifies.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_user_without_hash_never_authorizes() {
        let (authorizer, _, verifier) = setup(Some(User::new("u1", "a@x.com")));
        for password in ["secret", "", "anything"] {
            let result = authorizer
                .authorize(&json!({"email": "a@x.com", "password": password}))
                .await
                .unwrap();
            assert!(result.is_none());
        }
        assert_eq!(verifier.verifies.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let authorizer = CredentialsAuthorizer::new(Arc::new(BrokenStore));
        let err = authorizer
            .authorize(&json!({"email": "a@x.com", "password": "secret"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthwireError::Database(_)));
    }

    #[tokio::test]
    async fn test_unusable_hash_propagates() {
        let store = Arc::new(OneUser {
            user: Some(User::new("u1", "a@x.com").with_password_hash("garbage")),
            ..Default::default()
        });
        let authorizer = CredentialsAuthorizer::new(store);
        let err = authorizer
            .authorize(&json!({"email": "a@x.com", "password": "secret"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthwireError::Crypto(_)));
    }
}
