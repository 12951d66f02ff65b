//! Identity provider descriptors.
//!
//! Descriptors are static data plus one pure function each: turning the
//! provider's raw profile response into a normalized [`Profile`]. The
//! handshakes themselves belong to the host auth framework.

pub mod oauth1;
pub mod profile;
pub mod provider;
pub mod providers;

// Re-exports
pub use oauth1::{OAuth1Config, OAuth1Provider, TUMBLR};
pub use profile::Profile;
pub use provider::ProviderOptions;
pub use providers::{get_provider_config, OAuth2Provider, ProviderConfig, PROVIDER_IDS};
