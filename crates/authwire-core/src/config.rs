// AuthConfig — everything provider construction reads from the outside world.
//
// Built once at startup (from the process environment or a deserialized
// file) and passed by reference into `ProviderList::from_config`. Nothing
// else in the workspace reads the environment for provider settings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{AuthwireError, Result};

/// OAuth client identifier and secret for one provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    pub github: ClientCredentials,
    pub google: ClientCredentials,
    pub tumblr: ClientCredentials,

    /// Secret the host framework uses for signing sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Public origin of the application (e.g. "https://example.com").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Path prefix for auth routes.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_base_path() -> String {
    "/api/auth".to_string()
}

impl AuthConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env::var)
    }

    /// Load using an arbitrary key lookup. Tests substitute a map here.
    ///
    /// All six client variables are required; `AUTH_SECRET` and `AUTH_URL`
    /// are optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AuthwireError::Config(format!("missing environment variable {key}")))
        };
        let pair = |id_key: &str, secret_key: &str| -> Result<ClientCredentials> {
            Ok(ClientCredentials::new(required(id_key)?, required(secret_key)?))
        };

        let config = Self {
            github: pair(env::GITHUB_CLIENT_ID, env::GITHUB_CLIENT_SECRET)?,
            google: pair(env::GOOGLE_CLIENT_ID, env::GOOGLE_CLIENT_SECRET)?,
            tumblr: pair(env::TUMBLR_CLIENT_ID, env::TUMBLR_CLIENT_SECRET)?,
            secret: lookup(env::AUTH_SECRET).filter(|v| !v.is_empty()),
            base_url: lookup(env::AUTH_URL).filter(|v| !v.is_empty()),
            base_path: default_base_path(),
        };
        config.validate()?;
        tracing::debug!(base_url = ?config.base_url, base_path = %config.base_path, "auth config loaded");
        Ok(config)
    }

    /// Check values that deserialization alone cannot.
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            let parsed = url::Url::parse(base_url)
                .map_err(|e| AuthwireError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(AuthwireError::Config(format!(
                    "base URL must be http or https, got {:?}",
                    parsed.scheme()
                )));
            }
        }
        if !self.base_path.starts_with('/') {
            return Err(AuthwireError::Config(format!(
                "base path must start with '/', got {:?}",
                self.base_path
            )));
        }
        Ok(())
    }

    /// Base URL plus base path, without a trailing slash.
    pub fn auth_url(&self) -> String {
        let origin = self.base_url.as_deref().unwrap_or("").trim_end_matches('/');
        format!("{}{}", origin, self.base_path.trim_end_matches('/'))
    }
}
