//! Domain primitives: CellId, Source.

use serde::{Deserialize, Serialize};

/// Opaque cell identifier, assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub String);

impl CellId {
    /// Create a CellId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        CellId(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        CellId(uuid::Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CellId {
    fn from(id: &str) -> Self {
        CellId(id.to_string())
    }
}

/// Attribution string attached to a cell. Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Source(pub String);

impl Source {
    pub fn new(source: impl Into<String>) -> Self {
        Source(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match. An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        contains_ignore_case(&self.0, term)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Source {
    fn from(source: &str) -> Self {
        Source(source.to_string())
    }
}

/// Unicode-aware case-insensitive `contains`.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
