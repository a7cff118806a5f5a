//! Service layer: stateful client-side coordination over the domain ports.

/// Validated category mutations
pub mod category_service;
/// The category store
pub mod category_store;
/// Generic cached store
pub mod resource_store;
/// Signed-in principal
pub mod user_session;

pub use category_service::CategoryService;
pub use category_store::{CategoryStore, CATEGORIES_LOAD_ERROR};
pub use resource_store::{compare_names, sort_by_name, ResourceStore, StoreOptions};
pub use user_session::UserSession;
