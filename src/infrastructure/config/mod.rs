//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Configuration validation

/// figment loader
pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
