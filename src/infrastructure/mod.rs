//! Infrastructure layer module
//!
//! - HTTP transport for the Cashtrack API
//! - Configuration management
//! - Logging infrastructure

/// Configuration
pub mod config;
/// HTTP transport
pub mod http;
/// Logging
pub mod logging;
