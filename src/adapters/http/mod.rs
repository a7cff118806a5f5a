//! HTTP implementations of the domain ports.

/// Auth service adapter
pub mod auth_api;
/// Category REST adapter
pub mod category_api;

pub use auth_api::ConnectAuthApi;
pub use category_api::HttpCategoryApi;
