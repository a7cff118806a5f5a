//! HTTP transport for the Cashtrack API
//!
//! reqwest-based client, error classification and URL resolution.

/// reqwest client
pub mod client;
/// Transport errors
pub mod errors;
/// Base URL resolution
pub mod url;

pub use client::{ApiClient, ApiClientConfig};
pub use errors::ApiError;
pub use url::resolve_api_url;
