//! Session provider port.
//!
//! Supplies the currently authenticated principal and notifies listeners
//! whenever it changes. Stores scoped to a principal subscribe here instead
//! of reaching for a global.

use crate::domain::models::Principal;
use crate::domain::observable::{Listener, Subscription};

/// Source of the current principal.
pub trait SessionProvider: Send + Sync {
    /// The signed-in principal, if any.
    fn current(&self) -> Option<Principal>;

    /// Register for principal changes.
    ///
    /// The listener receives the current principal once on registration and
    /// then every new value. It stays registered for the life of the
    /// returned `Subscription`.
    fn subscribe(&self, listener: Listener<Option<Principal>>) -> Subscription;
}
