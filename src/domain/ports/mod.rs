//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that infrastructure adapters must implement:
//! - SessionProvider: current principal and change notifications
//! - RemoteFetch: loading a server-owned collection
//! - CategoryApi: category mutations
//! - AuthApi: session introspection and logout
//!
//! Services depend on these traits so tests can substitute doubles.

/// Auth port
pub mod auth_api;
/// Category port
pub mod category_api;
/// Collection fetch port
pub mod remote_fetch;
/// Session port
pub mod session_provider;

pub use auth_api::AuthApi;
pub use category_api::CategoryApi;
pub use remote_fetch::RemoteFetch;
pub use session_provider::SessionProvider;
