//! Resource store specialised to categories.

use std::sync::Arc;

use super::resource_store::{ResourceStore, StoreOptions};
use crate::domain::models::Category;
use crate::domain::ports::{RemoteFetch, SessionProvider};

/// Message shown when the category list cannot be loaded.
pub const CATEGORIES_LOAD_ERROR: &str = "Failed to load categories.";

/// Cached categories of the signed-in user.
pub type CategoryStore = ResourceStore<Category>;

impl ResourceStore<Category> {
    /// Category store scoped to `session`.
    pub fn new(
        session: Arc<dyn SessionProvider>,
        fetcher: Arc<dyn RemoteFetch<Category>>,
    ) -> Self {
        Self::with_options(
            session,
            fetcher,
            StoreOptions {
                label: "categories",
                error_message: CATEGORIES_LOAD_ERROR.to_string(),
            },
        )
    }
}
