// Error codes and error types.
//
// `ErrorCode` is what a client sees; `AuthwireError` is what flows between
// crates. A rejected login is not an error at all: the authorizer returns
// `Ok(None)` and only the sign-in layer turns that into an `ApiError`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error codes surfaced to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Any failed credentials login. Deliberately carries no cause.
    InvalidCredentials,
    ProviderNotFound,
    /// The provider exists but signs users in through a redirect flow.
    CredentialsNotSupported,
    InternalServerError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidCredentials => "Invalid credentials",
            Self::ProviderNotFound => "Provider not found",
            Self::CredentialsNotSupported => "Provider does not support credentials sign-in",
            Self::InternalServerError => "Internal server error",
        };
        write!(f, "{msg}")
    }
}

/// HTTP status codes used by the API error system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpStatus {
    BadRequest = 400,
    Unauthorized = 401,
    NotFound = 404,
    InternalServerError = 500,
}

impl HttpStatus {
    pub fn status_code(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status_code())
    }
}

/// API error carrying an HTTP status, an error code, and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{status} {code}: {message}")]
pub struct ApiError {
    pub status: HttpStatus,
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: HttpStatus, code: ErrorCode) -> Self {
        Self {
            message: code.to_string(),
            status,
            code,
        }
    }

    pub fn with_message(status: HttpStatus, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(code: ErrorCode) -> Self {
        Self::new(HttpStatus::BadRequest, code)
    }

    pub fn unauthorized(code: ErrorCode) -> Self {
        Self::new(HttpStatus::Unauthorized, code)
    }

    pub fn not_found(code: ErrorCode) -> Self {
        Self::new(HttpStatus::NotFound, code)
    }

    pub fn internal(code: ErrorCode) -> Self {
        Self::new(HttpStatus::InternalServerError, code)
    }

    /// The generic response for every rejected credentials login.
    pub fn invalid_credentials() -> Self {
        Self::unauthorized(ErrorCode::InvalidCredentials)
    }

    /// Build a JSON body for the error response.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code,
            "message": self.message,
        })
    }
}

/// Internal (non-HTTP) error.
#[derive(Debug, thiserror::Error)]
pub enum AuthwireError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The user store failed (not "user missing", which is `Ok(None)`).
    #[error("Database error: {0}")]
    Database(String),

    #[error("Crypto error: {0}")]
    Crypto(String),

    /// A provider returned a profile that does not have the expected shape.
    #[error("Profile error: {0}")]
    Profile(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Unified result type for authwire operations.
pub type Result<T> = std::result::Result<T, AuthwireError>;
