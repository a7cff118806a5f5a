//! Adapters implementing the domain ports against concrete backends.

/// HTTP adapters
pub mod http;
