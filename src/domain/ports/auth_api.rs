//! Authentication service port.

use async_trait::async_trait;

use crate::domain::errors::FetchResult;
use crate::domain::models::Principal;

/// Session introspection and logout against the auth service.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Who the current session belongs to.
    ///
    /// Returns `Ok(None)` when the server answers without a user.
    async fn me(&self) -> FetchResult<Option<Principal>>;

    /// End the current session on the server.
    async fn logout(&self) -> FetchResult<()>;
}
