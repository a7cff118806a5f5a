//! Category mutations that keep the cached store in step with the server.

use std::sync::Arc;
use tracing::{info, instrument};

use super::category_store::CategoryStore;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Category;
use crate::domain::ports::CategoryApi;

/// Service applying category changes remotely, then locally.
///
/// The store is only touched after the server accepted the change.
pub struct CategoryService {
    api: Arc<dyn CategoryApi>,
    store: CategoryStore,
}

impl CategoryService {
    /// Service over `api` keeping `store` current.
    pub fn new(api: Arc<dyn CategoryApi>, store: CategoryStore) -> Self {
        Self { api, store }
    }

    /// The cached categories.
    pub fn store(&self) -> &CategoryStore {
        &self.store
    }

    /// Create a category and add it to the store.
    #[instrument(skip(self), err)]
    pub async fn create(&self, name: &str) -> DomainResult<Category> {
        let name = validate_name(name)?;
        let category = self.api.create(name).await?;
        info!(category_id = category.id, "category created");
        self.store.add(category.clone());
        Ok(category)
    }

    /// Rename a category and update the cached copy.
    #[instrument(skip(self), err)]
    pub async fn rename(&self, id: i64, name: &str) -> DomainResult<()> {
        let name = validate_name(name)?;
        self.api.rename(id, name).await?;
        if let Some(existing) = self.store.items().into_iter().find(|c| c.id == id) {
            self.store.update(existing.renamed(name));
        }
        Ok(())
    }

    /// Delete a category and drop it from the store.
    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.api.delete(id).await?;
        self.store.remove(&id);
        Ok(())
    }
}

fn validate_name(name: &str) -> DomainResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::ValidationFailed(
            "category name cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  Travel ").unwrap(), "Travel");
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        assert!(matches!(
            validate_name("   "),
            Err(DomainError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_validate_name_accepts_long_names() {
        let name = "x".repeat(500);
        assert_eq!(validate_name(&name).unwrap(), name);
    }
}
