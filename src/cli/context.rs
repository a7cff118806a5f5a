//! Wiring of the client stack from configuration.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::adapters::http::{ConnectAuthApi, HttpCategoryApi};
use crate::domain::errors::DomainError;
use crate::domain::models::{Config, Principal};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::http::{ApiClient, ApiClientConfig};
use crate::services::{CategoryService, CategoryStore, UserSession};

/// Everything a command needs, built once per invocation.
pub struct AppContext {
    /// Loaded configuration
    pub config: Config,
    /// Session state
    pub session: Arc<UserSession>,
    /// Category operations
    pub categories: CategoryService,
}

impl AppContext {
    /// Load configuration from `config_path` or the default locations.
    pub fn load(config_path: Option<&Path>) -> Result<Config> {
        match config_path {
            Some(path) => ConfigLoader::load_from_file(path),
            None => ConfigLoader::load(),
        }
    }

    /// Wire the HTTP client, session and stores.
    pub fn build(config: Config) -> Result<Self> {
        let client = ApiClient::new(ApiClientConfig::from(&config.api))
            .context("Failed to create API client")?;
        let client = Arc::new(client);

        let auth = Arc::new(ConnectAuthApi::new(Arc::clone(&client)));
        let session = Arc::new(UserSession::new(auth));

        let category_api = Arc::new(HttpCategoryApi::new(client));
        let store = CategoryStore::new(session.clone(), category_api.clone());
        let categories = CategoryService::new(category_api, store);

        Ok(Self {
            config,
            session,
            categories,
        })
    }

    /// Restore the session or fail with a "not signed in" error.
    pub async fn require_user(&self) -> Result<Principal> {
        self.session
            .load_user()
            .await
            .ok_or_else(|| DomainError::NotSignedIn.into())
    }
}
