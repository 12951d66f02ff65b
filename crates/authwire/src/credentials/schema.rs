// Login schema: turns an untyped credentials payload into typed fields.

use std::fmt;

use serde::Deserialize;

/// Why a credentials payload was rejected. Never shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("credentials must be an object with string fields: {0}")]
    Malformed(String),
    #[error("Email is required")]
    InvalidEmail,
    #[error("Password is required")]
    MissingPassword,
}

/// Validated login fields.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize)]
struct RawLogin {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl LoginCredentials {
    /// Validate a payload. Unknown keys (csrf token, callback URL, ...) are ignored.
    pub fn parse(raw: &serde_json::Value) -> Result<Self, ValidationError> {
        if !raw.is_object() {
            return Err(ValidationError::Malformed("not an object".into()));
        }
        let fields = RawLogin::deserialize(raw)
            .map_err(|e| ValidationError::Malformed(e.to_string()))?;

        let email = fields.email.ok_or(ValidationError::InvalidEmail)?;
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        let password = fields.password.ok_or(ValidationError::MissingPassword)?;
        if password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }

        Ok(Self { email, password })
    }
}

/// Validate that a string looks like an email address: one `@`, a non-empty
/// local part, a dotted domain whose labels are non-empty, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
    })
}
