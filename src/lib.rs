//! Cashtrack client
//!
//! Client-side state and API access for the Cashtrack personal finance
//! service: a single-flight cached store for per-user collections, the
//! session that scopes it, HTTP adapters, and money formatting helpers.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors, ports, observable values
//! - **Service Layer** (`services`): resource stores and session state
//! - **Infrastructure Layer** (`infrastructure`): HTTP, config, logging
//! - **Adapters** (`adapters`): port implementations over HTTP
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cashtrack_client::services::{CategoryStore, UserSession};
//!
//! let session = Arc::new(UserSession::new(auth));
//! let store = CategoryStore::new(session.clone(), categories_api);
//! session.load_user().await;
//! if store.load(false).await {
//!     println!("{} categories", store.items().len());
//! }
//! ```

/// Port implementations
pub mod adapters;
/// Command-line interface
pub mod cli;
/// Models, errors, ports
pub mod domain;
/// HTTP, config, logging
pub mod infrastructure;
/// Stores and session
pub mod services;

pub use domain::errors::{DomainError, FetchError};
pub use domain::models::{Category, Config, Principal};
pub use domain::observable::{Observable, Readable, Subscription};
pub use domain::ports::{AuthApi, CategoryApi, RemoteFetch, SessionProvider};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CategoryService, CategoryStore, ResourceStore, UserSession};
