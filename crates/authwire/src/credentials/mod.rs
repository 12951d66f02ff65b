// Credentials (email/password) provider.

pub mod authorize;
pub mod schema;

use std::sync::Arc;

use authwire_core::db::models::User;
use authwire_core::db::user_store::UserLookup;
use authwire_core::error::Result;

pub use authorize::CredentialsAuthorizer;
pub use schema::{is_valid_email, LoginCredentials, ValidationError};

use crate::crypto::PasswordVerifier;

/// The credentials entry of the provider list.
#[derive(Debug, Clone)]
pub struct CredentialsProvider {
    authorizer: CredentialsAuthorizer,
}

impl CredentialsProvider {
    pub const ID: &'static str = "credentials";
    pub const NAME: &'static str = "Credentials";

    pub fn new(users: Arc<dyn UserLookup>) -> Self {
        Self {
            authorizer: CredentialsAuthorizer::new(users),
        }
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn PasswordVerifier>) -> Self {
        self.authorizer = self.authorizer.with_verifier(verifier);
        self
    }

    pub fn id(&self) -> &str {
        Self::ID
    }

    pub fn name(&self) -> &str {
        Self::NAME
    }

    /// See [`CredentialsAuthorizer::authorize`].
    pub async fn authorize(&self, credentials: &serde_json::Value) -> Result<Option<User>> {
        self.authorizer.authorize(credentials).await
    }
}
