//! Capabilities a record needs to be held by a resource store.

use std::fmt::Debug;

/// A record with a stable identifier.
pub trait Identified {
    /// Identifier type.
    type Id: PartialEq + Debug + Send + Sync;

    /// Stable identifier of this record.
    fn id(&self) -> Self::Id;
}

/// A record with a display name used for ordering.
pub trait Named {
    /// Name used for ordering.
    fn name(&self) -> &str;
}
