//! Remote fetch port for collections owned by the server.

use async_trait::async_trait;

use crate::domain::errors::FetchResult;

/// Loads the full collection visible to the ambient session.
#[async_trait]
pub trait RemoteFetch<T>: Send + Sync {
    /// Fetch every item.
    ///
    /// # Errors
    /// - `FetchError::Transport` if the request never completed
    /// - `FetchError::AuthenticationDenied` if the session was rejected
    /// - `FetchError::NonSuccessResponse` for any other non-2xx status
    /// - `FetchError::Decode` if the body was not the expected shape
    async fn fetch_all(&self) -> FetchResult<Vec<T>>;
}
