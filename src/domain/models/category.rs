//! Category model as served by `/api/categories`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::{Identified, Named};

/// A user-defined transaction category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional display color (e.g. `#aabbcc`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// A category with no color, created now.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: None,
            created_at: Utc::now(),
        }
    }

    /// Returns a copy carrying a new name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

impl Identified for Category {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for Category {
    fn name(&self) -> &str {
        &self.name
    }
}
