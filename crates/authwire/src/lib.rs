//! authwire — sign-in providers for a web application.
//!
//! [`ProviderList::from_config`] builds the list the host auth framework
//! routes on: GitHub and Google (OAuth 2.0), Tumblr (OAuth 1.0a) and an
//! email/password [`CredentialsProvider`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use authwire::{AuthConfig, ProviderList};
//! use authwire_memory::MemoryUserStore;
//!
//! # async fn run() -> authwire_core::Result<()> {
//! authwire_core::env::init_logger();
//! let config = AuthConfig::from_env()?;
//! let providers = ProviderList::from_config(&config, Arc::new(MemoryUserStore::new()));
//!
//! let login = serde_json::json!({"email": "a@x.com", "password": "secret"});
//! let user = providers.credentials().unwrap().authorize(&login).await?;
//! # let _ = user;
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod crypto;
pub mod providers;
pub mod sign_in;

pub use authwire_core::{AuthConfig, ClientCredentials, User, UserLookup};
pub use authwire_oauth::Profile;
pub use credentials::{CredentialsAuthorizer, CredentialsProvider, LoginCredentials};
pub use crypto::{DefaultPasswordVerifier, PasswordVerifier};
pub use providers::{Provider, ProviderList, ProviderType, PublicProvider};
pub use sign_in::{sign_in, sign_in_with_credentials};
