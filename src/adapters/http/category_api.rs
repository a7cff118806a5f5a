//! REST adapter for `/api/categories`.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

use crate::domain::errors::FetchResult;
use crate::domain::models::Category;
use crate::domain::ports::{CategoryApi, RemoteFetch};
use crate::infrastructure::http::ApiClient;

const CATEGORIES_PATH: &str = "/api/categories";

#[derive(Debug, Serialize)]
struct CategoryPayload<'a> {
    name: &'a str,
}

/// Category endpoints over HTTP.
pub struct HttpCategoryApi {
    client: Arc<ApiClient>,
}

impl HttpCategoryApi {
    /// Category API over the shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteFetch<Category> for HttpCategoryApi {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> FetchResult<Vec<Category>> {
        // The server encodes an empty list as `null`.
        let categories: Option<Vec<Category>> = self.client.get_json(CATEGORIES_PATH).await?;
        Ok(categories.unwrap_or_default())
    }
}

#[async_trait]
impl CategoryApi for HttpCategoryApi {
    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> FetchResult<Category> {
        let payload = CategoryPayload { name };
        Ok(self.client.post_json(CATEGORIES_PATH, &payload).await?)
    }

    #[instrument(skip(self))]
    async fn rename(&self, id: i64, name: &str) -> FetchResult<()> {
        let payload = CategoryPayload { name };
        self.client
            .patch_json(&format!("{CATEGORIES_PATH}/{id}"), &payload)
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> FetchResult<()> {
        self.client.delete(&format!("{CATEGORIES_PATH}/{id}")).await?;
        Ok(())
    }
}
