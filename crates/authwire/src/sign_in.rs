// Sign-in outcome mapping.
//
// Turns the authorizer's `Option<User>` into what the host returns to the
// client. Every rejection gets the same 401 body; infrastructure faults get
// a 500 and are logged here, since the client learns nothing about them.

use authwire_core::db::models::User;
use authwire_core::error::{ApiError, AuthwireError, ErrorCode};

use crate::credentials::CredentialsProvider;
use crate::providers::{Provider, ProviderList};

/// Run a credentials login.
pub async fn sign_in_with_credentials(
    provider: &CredentialsProvider,
    credentials: &serde_json::Value,
) -> Result<User, ApiError> {
    match provider.authorize(credentials).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(ApiError::invalid_credentials()),
        Err(e) => Err(internal_error(e)),
    }
}

/// Run a credentials login against the provider registered under `provider_id`.
pub async fn sign_in(
    providers: &ProviderList,
    provider_id: &str,
    credentials: &serde_json::Value,
) -> Result<User, ApiError> {
    match providers.require(provider_id)? {
        Provider::Credentials(provider) => sign_in_with_credentials(provider, credentials).await,
        _ => {
            tracing::debug!(provider = provider_id, "credentials sign-in sent to a redirect provider");
            Err(ApiError::bad_request(ErrorCode::CredentialsNotSupported))
        }
    }
}

fn internal_error(err: AuthwireError) -> ApiError {
    match err {
        AuthwireError::Api(api) => api,
        other => {
            tracing::error!(error = %other, "credentials sign-in failed");
            ApiError::internal(ErrorCode::InternalServerError)
        }
    }
}
