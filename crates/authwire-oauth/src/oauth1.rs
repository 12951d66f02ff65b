// OAuth 1.0a providers.
//
// OAuth 1.0a needs three endpoints (request token, authorize, access token)
// where OAuth 2.0 needs two, and its profile responses are not standardized,
// so each config carries its own profile mapper.

use std::fmt;

use authwire_core::error::{AuthwireError, Result};
use serde::Deserialize;

use crate::profile::Profile;
use crate::provider::ProviderOptions;

/// Maps a raw profile response to a [`Profile`].
pub type ProfileMapper = fn(&serde_json::Value) -> Result<Profile>;

/// Static configuration for an OAuth 1.0a provider.
#[derive(Clone, Copy)]
pub struct OAuth1Config {
    pub id: &'static str,
    pub name: &'static str,
    /// Protocol version string sent as `oauth_version`.
    pub version: &'static str,
    pub request_token_url: &'static str,
    /// The request token is appended to this URL.
    pub authorization_url: &'static str,
    pub access_token_url: &'static str,
    pub profile_url: &'static str,
    pub profile: ProfileMapper,
}

impl fmt::Debug for OAuth1Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth1Config")
            .field("id", &self.id)
            .field("version", &self.version)
            .field("request_token_url", &self.request_token_url)
            .field("authorization_url", &self.authorization_url)
            .field("access_token_url", &self.access_token_url)
            .field("profile_url", &self.profile_url)
            .finish_non_exhaustive()
    }
}

/// An OAuth 1.0a provider: static config plus the consumer key/secret.
#[derive(Debug, Clone)]
pub struct OAuth1Provider {
    pub config: &'static OAuth1Config,
    pub options: ProviderOptions,
}

impl OAuth1Provider {
    pub fn new(config: &'static OAuth1Config, options: ProviderOptions) -> Self {
        Self { config, options }
    }

    pub fn id(&self) -> &str {
        self.config.id
    }

    pub fn name(&self) -> &str {
        self.config.name
    }

    /// The URL the user is sent to once a request token has been obtained.
    pub fn authorization_url_for(&self, request_token: &str) -> String {
        format!("{}{}", self.config.authorization_url, request_token)
    }

    pub fn normalize_profile(&self, data: &serde_json::Value) -> Result<Profile> {
        (self.config.profile)(data)
    }
}

// --- Tumblr ---

#[derive(Debug, Deserialize)]
struct TumblrProfile {
    response: TumblrResponse,
}

#[derive(Debug, Deserialize)]
struct TumblrResponse {
    user: TumblrUser,
}

#[derive(Debug, Deserialize)]
struct TumblrUser {
    name: String,
}

/// Tumblr's `/v2/user/info` identifies users by blog name only and has no
/// email claim, so `email` stays `None`.
pub fn tumblr_profile(data: &serde_json::Value) -> Result<Profile> {
    let profile = TumblrProfile::deserialize(data)
        .map_err(|e| AuthwireError::Profile(format!("unexpected tumblr profile: {e}")))?;
    let name = profile.response.user.name;

    Ok(Profile {
        id: name.clone(),
        name: Some(name),
        email: None,
        image: None,
    })
}

pub static TUMBLR: OAuth1Config = OAuth1Config {
    id: "tumblr",
    name: "Tumblr",
    version: "1.0A",
    request_token_url: "https://www.tumblr.com/oauth/request_token",
    authorization_url: "https://www.tumblr.com/oauth/authorize?oauth_token=",
    access_token_url: "https://www.tumblr.com/oauth/access_token",
    profile_url: "https://api.tumblr.com/v2/user/info",
    profile: tumblr_profile,
};
