// OAuth 2.0 providers: a data-driven registry.
//
// Each provider is a `ProviderConfig` constant holding its endpoints, default
// scopes and profile field mapping. The single `OAuth2Provider` type serves
// all of them.

pub mod registry;
pub use registry::*;
