// The provider list handed to the host auth framework.
//
// A tagged enum: each variant carries only the data and behavior it needs.
// OAuth entries are static descriptors plus a profile mapper; the credentials
// entry carries the authorizer.

use std::collections::BTreeMap;
use std::sync::Arc;

use authwire_core::config::AuthConfig;
use authwire_core::db::user_store::UserLookup;
use authwire_core::error::{ApiError, ErrorCode, Result};
use authwire_oauth::oauth1::{OAuth1Provider, TUMBLR};
use authwire_oauth::providers::{OAuth2Provider, GITHUB, GOOGLE};
use authwire_oauth::{Profile, ProviderOptions};
use serde::Serialize;

use crate::credentials::CredentialsProvider;

/// One entry of the provider list.
#[derive(Debug, Clone)]
pub enum Provider {
    OAuth2(OAuth2Provider),
    OAuth1(OAuth1Provider),
    Credentials(CredentialsProvider),
}

/// Provider type as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Both OAuth versions.
    OAuth,
    Credentials,
}

impl Provider {
    pub fn id(&self) -> &str {
        match self {
            Self::OAuth2(p) => p.id(),
            Self::OAuth1(p) => p.id(),
            Self::Credentials(p) => p.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::OAuth2(p) => p.name(),
            Self::OAuth1(p) => p.name(),
            Self::Credentials(p) => p.name(),
        }
    }

    pub fn provider_type(&self) -> ProviderType {
        match self {
            Self::OAuth2(_) | Self::OAuth1(_) => ProviderType::OAuth,
            Self::Credentials(_) => ProviderType::Credentials,
        }
    }

    /// Normalize a raw profile response. `None` for the credentials provider,
    /// which has no external profile.
    pub fn normalize_profile(&self, data: &serde_json::Value) -> Option<Result<Profile>> {
        match self {
            Self::OAuth2(p) => Some(p.normalize_profile(data)),
            Self::OAuth1(p) => Some(p.normalize_profile(data)),
            Self::Credentials(_) => None,
        }
    }
}

/// What `GET {base}/providers` returns for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProvider {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: ProviderType,
    pub signin_url: String,
    pub callback_url: String,
}

/// Immutable, ordered provider list built once at startup.
#[derive(Debug, Clone)]
pub struct ProviderList {
    providers: Vec<Provider>,
}

impl ProviderList {
    /// GitHub, Google, credentials, Tumblr.
    pub fn from_config(config: &AuthConfig, users: Arc<dyn UserLookup>) -> Self {
        let providers = vec![
            Provider::OAuth2(OAuth2Provider::new(&GITHUB, ProviderOptions::from(&config.github))),
            Provider::OAuth2(OAuth2Provider::new(&GOOGLE, ProviderOptions::from(&config.google))),
            Provider::Credentials(CredentialsProvider::new(users)),
            Provider::OAuth1(OAuth1Provider::new(&TUMBLR, ProviderOptions::from(&config.tumblr))),
        ];
        tracing::info!(
            providers = ?providers.iter().map(Provider::id).collect::<Vec<_>>(),
            "auth providers configured"
        );
        Self { providers }
    }

    /// Build from explicit entries. Later duplicates of an ID are dropped.
    pub fn new(providers: impl IntoIterator<Item = Provider>) -> Self {
        let mut list: Vec<Provider> = Vec::new();
        for provider in providers {
            if list.iter().any(|p| p.id() == provider.id()) {
                tracing::warn!(id = provider.id(), "duplicate provider id ignored");
                continue;
            }
            list.push(provider);
        }
        Self { providers: list }
    }

    pub fn get(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id() == id)
    }

    /// Like [`get`](Self::get), as an API error for unknown IDs.
    pub fn require(&self, id: &str) -> std::result::Result<&Provider, ApiError> {
        self.get(id)
            .ok_or_else(|| ApiError::not_found(ErrorCode::ProviderNotFound))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Provider> {
        self.providers.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.providers.iter().map(Provider::id).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// The credentials provider, if configured.
    pub fn credentials(&self) -> Option<&CredentialsProvider> {
        self.providers.iter().find_map(|p| match p {
            Provider::Credentials(c) => Some(c),
            _ => None,
        })
    }

    /// Client-facing listing keyed by provider ID.
    ///
    /// `auth_url` is the base URL plus base path, e.g. `https://example.com/api/auth`.
    pub fn public_listing(&self, auth_url: &str) -> BTreeMap<String, PublicProvider> {
        let base = auth_url.trim_end_matches('/');
        self.providers
            .iter()
            .map(|p| {
                let id = p.id().to_string();
                let entry = PublicProvider {
                    id: id.clone(),
                    name: p.name().to_string(),
                    provider_type: p.provider_type(),
                    signin_url: format!("{base}/signin/{id}"),
                    callback_url: format!("{base}/callback/{id}"),
                };
                (id, entry)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ProviderList {
    type Item = &'a Provider;
    type IntoIter = std::slice::Iter<'a, Provider>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.iter()
    }
}
