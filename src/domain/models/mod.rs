//! Domain models.

/// Categories
pub mod category;
/// Client configuration
pub mod config;
/// Store item capabilities
pub mod item;
/// Authenticated user
pub mod principal;

pub use category::Category;
pub use config::{ApiConfig, Config, LoggingConfig};
pub use item::{Identified, Named};
pub use principal::{Principal, ScopeKey};
