//! Core types shared by every authwire crate.
//!
//! - [`error`]: the error taxonomy and HTTP-facing [`ApiError`]
//! - [`env`]: environment mode detection, env var names, logger setup
//! - [`config`]: the explicit [`AuthConfig`] built once at startup
//! - [`db`]: the [`User`] record and the [`UserLookup`] collaborator trait

pub mod config;
pub mod db;
pub mod env;
pub mod error;

// Re-exports for convenience
pub use config::{AuthConfig, ClientCredentials};
pub use db::models::User;
pub use db::user_store::UserLookup;
pub use error::{ApiError, AuthwireError, ErrorCode, HttpStatus, Result};
