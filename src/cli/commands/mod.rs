//! CLI command implementations.

/// `categories` subcommands
pub mod categories;
/// `money` subcommands
pub mod money;
/// `me` and `logout`
pub mod session;
