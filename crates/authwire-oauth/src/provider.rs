// Per-provider client options, shared by both OAuth versions.

use authwire_core::ClientCredentials;
use serde::{Deserialize, Serialize};

/// Client options for one OAuth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOptions {
    /// OAuth client ID (the consumer key for OAuth 1.0a).
    pub client_id: String,

    /// OAuth client secret (the consumer secret for OAuth 1.0a).
    #[serde(skip_serializing)]
    pub client_secret: String,

    /// Scopes requested on top of the provider defaults. Ignored by OAuth 1.0a.
    #[serde(default)]
    pub scope: Vec<String>,

    /// Drop the provider's default scopes.
    #[serde(default)]
    pub disable_default_scope: bool,
}

impl ProviderOptions {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scope: Vec::new(),
            disable_default_scope: false,
        }
    }

    pub fn with_scopes(mut self, scopes: &[&str]) -> Self {
        self.scope = scopes.iter().map(|s| s.to_string()).collect();
        self
    }
}

impl From<&ClientCredentials> for ProviderOptions {
    fn from(creds: &ClientCredentials) -> Self {
        Self::new(creds.client_id.clone(), creds.client_secret.clone())
    }
}
