// The user lookup collaborator.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::db::models::User;
use crate::error::Result;

/// Read access to the user store.
///
/// `Ok(None)` means "no such user". `Err` is reserved for store failures and
/// is propagated to the caller untouched.
#[async_trait]
pub trait UserLookup: Send + Sync + fmt::Debug {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
}

#[async_trait]
impl<T: UserLookup + ?Sized> UserLookup for Arc<T> {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        (**self).get_user_by_email(email).await
    }
}
