//! Domain layer for the Cashtrack client
//!
//! This module contains the models, errors, ports and the observable
//! primitive the services are built from.

/// Error types
pub mod errors;
/// Data models
pub mod models;
/// Amount formatting
pub mod money;
/// Observable values
pub mod observable;
/// Port traits
pub mod ports;

pub use errors::{DomainError, DomainResult, FetchError, FetchResult};
