//! Category mutation port (REST `/api/categories`).

use async_trait::async_trait;

use crate::domain::errors::FetchResult;
use crate::domain::models::Category;

/// Server-side category mutations.
#[async_trait]
pub trait CategoryApi: Send + Sync {
    /// Create a category and return it as stored by the server.
    async fn create(&self, name: &str) -> FetchResult<Category>;

    /// Rename an existing category.
    async fn rename(&self, id: i64, name: &str) -> FetchResult<()>;

    /// Delete a category.
    async fn delete(&self, id: i64) -> FetchResult<()>;
}
