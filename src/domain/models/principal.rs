use serde::{Deserialize, Serialize};

/// Identifier of an authenticated user; the key cached data is scoped to.
pub type ScopeKey = i64;

/// The currently authenticated user as reported by the auth service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// User id
    #[serde(default)]
    pub id: Option<i64>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Principal {
    /// Principal carrying only an id.
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Scope key of this principal. A missing or zero id counts as no principal.
    pub fn scope(&self) -> Option<ScopeKey> {
        self.id.filter(|id| *id != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_requires_nonzero_id() {
        assert_eq!(Principal::with_id(4).scope(), Some(4));
        assert_eq!(Principal::with_id(0).scope(), None);
        assert_eq!(Principal::default().scope(), None);
    }

    #[test]
    fn test_deserialize_missing_id() {
        let principal: Principal = serde_json::from_str(r#"{"email": "a@b.ch"}"#).unwrap();
        assert_eq!(principal.scope(), None);
        assert_eq!(principal.email.as_deref(), Some("a@b.ch"));
    }
}
