// OAuth 2.0 provider registry.
//
// Each provider is a static `ProviderConfig`; `OAuth2Provider` pairs one with
// the client options loaded at startup and knows how to normalize that
// provider's userinfo response.

use authwire_core::error::{AuthwireError, Result};

use crate::profile::Profile;
use crate::provider::ProviderOptions;

/// Profile field mapping: where to find each normalized field in the
/// provider's userinfo JSON.
#[derive(Debug, Clone, Copy)]
pub struct ProfileMapping {
    /// JSON path to user ID (e.g., "id", "sub", "data.user.id").
    pub id: &'static str,
    /// JSON path to name.
    pub name: &'static str,
    /// Used when `name` is missing or null.
    pub name_fallback: Option<&'static str>,
    /// JSON path to email.
    pub email: &'static str,
    /// JSON path to avatar/image.
    pub image: &'static str,
}

/// Static configuration for an OAuth 2.0 provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub authorization_endpoint: &'static str,
    pub token_endpoint: &'static str,
    pub userinfo_endpoint: &'static str,
    pub default_scopes: &'static [&'static str],
    pub scope_joiner: &'static str,
    pub profile_mapping: ProfileMapping,
}

/// An OAuth 2.0 provider: static config plus the client options.
#[derive(Debug, Clone)]
pub struct OAuth2Provider {
    pub config: &'static ProviderConfig,
    pub options: ProviderOptions,
}

impl OAuth2Provider {
    pub fn new(config: &'static ProviderConfig, options: ProviderOptions) -> Self {
        Self { config, options }
    }

    pub fn id(&self) -> &str {
        self.config.id
    }

    pub fn name(&self) -> &str {
        self.config.name
    }

    /// Defaults (unless disabled) followed by the configured extras, deduplicated.
    pub fn scopes(&self) -> Vec<String> {
        let mut scopes: Vec<String> = if self.options.disable_default_scope {
            Vec::new()
        } else {
            self.config.default_scopes.iter().map(|s| s.to_string()).collect()
        };
        for scope in &self.options.scope {
            if !scopes.contains(scope) {
                scopes.push(scope.clone());
            }
        }
        scopes
    }

    /// Scopes joined the way the provider expects them on the wire.
    pub fn scope_param(&self) -> String {
        self.scopes().join(self.config.scope_joiner)
    }

    /// Map the provider's userinfo response to a [`Profile`].
    ///
    /// Fails only when the ID is missing; every other field is optional.
    pub fn normalize_profile(&self, data: &serde_json::Value) -> Result<Profile> {
        let mapping = &self.config.profile_mapping;

        let id = extract_field(data, mapping.id).ok_or_else(|| {
            AuthwireError::Profile(format!(
                "{} profile has no '{}' field",
                self.config.id, mapping.id
            ))
        })?;

        let name = extract_field(data, mapping.name)
            .or_else(|| mapping.name_fallback.and_then(|path| extract_field(data, path)));

        Ok(Profile {
            id,
            name,
            email: extract_field(data, mapping.email),
            image: extract_field(data, mapping.image),
        })
    }
}

/// Extracts a string from a nested JSON path like "data.user.id".
pub(crate) fn extract_field(data: &serde_json::Value, path: &str) -> Option<String> {
    let mut current = data;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    match current {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// =============================================================================
// Provider configs
// =============================================================================

pub static GOOGLE: ProviderConfig = ProviderConfig {
    id: "google",
    name: "Google",
    authorization_endpoint: "https://accounts.google.com/o/oauth2/v2/auth",
    token_endpoint: "https://oauth2.googleapis.com/token",
    userinfo_endpoint: "https://openidconnect.googleapis.com/v1/userinfo",
    default_scopes: &["openid", "email", "profile"],
    scope_joiner: " ",
    profile_mapping: ProfileMapping {
        id: "sub",
        name: "name",
        name_fallback: None,
        email: "email",
        image: "picture",
    },
};

pub static GITHUB: ProviderConfig = ProviderConfig {
    id: "github",
    name: "GitHub",
    authorization_endpoint: "https://github.com/login/oauth/authorize",
    token_endpoint: "https://github.com/login/oauth/access_token",
    userinfo_endpoint: "https://api.github.com/user",
    default_scopes: &["read:user", "user:email"],
    scope_joiner: " ",
    profile_mapping: ProfileMapping {
        id: "id",
        name: "name",
        name_fallback: Some("login"),
        email: "email",
        image: "avatar_url",
    },
};

/// Lookup a provider config by its ID string.
pub fn get_provider_config(id: &str) -> Option<&'static ProviderConfig> {
    match id {
        "github" => Some(&GITHUB),
        "google" => Some(&GOOGLE),
        _ => None,
    }
}

/// All OAuth 2.0 provider IDs.
pub const PROVIDER_IDS: &[&str] = &["github", "google"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_providers_registered() {
        for id in PROVIDER_IDS {
            let config = get_provider_config(id).expect("registered");
            assert_eq!(config.id, *id);
        }
        assert!(get_provider_config("tumblr").is_none());
    }

    #[test]
    fn test_extract_nested_field() {
        let data = serde_json::json!({"data": {"user": {"open_id": "12345"}}});
        assert_eq!(extract_field(&data, "data.user.open_id"), Some("12345".to_string()));
        assert_eq!(extract_field(&data, "data.user.missing"), None);
    }

    #[test]
    fn test_github_profile_stringifies_id_and_falls_back_to_login() {
        let provider = OAuth2Provider::new(&GITHUB, ProviderOptions::new("id", "secret"));
        let profile = provider
            .normalize_profile(&serde_json::json!({
                "id": 583231,
                "login": "octocat",
                "name": null,
                "email": "octocat@github.com",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231"
            }))
            .unwrap();
        assert_eq!(profile.id, "583231");
        assert_eq!(profile.name.as_deref(), Some("octocat"));
        assert_eq!(profile.email.as_deref(), Some("octocat@github.com"));
        assert!(profile.image.is_some());
    }

    #[test]
    fn test_google_profile_uses_sub() {
        let provider = OAuth2Provider::new(&GOOGLE, ProviderOptions::new("id", "secret"));
        let profile = provider
            .normalize_profile(&serde_json::json!({
                "sub": "1122334455",
                "name": "Jane Doe",
                "email": "jane@gmail.com",
                "picture": "https://lh3.googleusercontent.com/a/x"
            }))
            .unwrap();
        assert_eq!(profile.id, "1122334455");
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_profile_without_id_is_an_error() {
        let provider = OAuth2Provider::new(&GOOGLE, ProviderOptions::new("id", "secret"));
        let err = provider
            .normalize_profile(&serde_json::json!({"name": "x"}))
            .unwrap_err();
        assert!(matches!(err, AuthwireError::Profile(_)));
    }

    #[test]
    fn test_scopes_merge_defaults_and_extras() {
        let options = ProviderOptions::new("id", "secret").with_scopes(&["repo", "user:email"]);
        let provider = OAuth2Provider::new(&GITHUB, options);
        assert_eq!(provider.scopes(), vec!["read:user", "user:email", "repo"]);
        assert_eq!(provider.scope_param(), "read:user user:email repo");
    }

    #[test]
    fn test_disable_default_scope() {
        let mut options = ProviderOptions::new("id", "secret").with_scopes(&["openid"]);
        options.disable_default_scope = true;
        let provider = OAuth2Provider::new(&GOOGLE, options);
        assert_eq!(provider.scopes(), vec!["openid"]);
    }
}
