//! Domain identifier and record types
//!
//! Resource identifiers are opaque keys issued by the query endpoint and only
//! ever handed back to the entities endpoint. Records are passed through as
//! raw JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A full asset record as returned by the entities endpoint.
///
/// The schema is owned by the remote API and never validated locally.
pub type ResourceRecord = serde_json::Value;

/// Cloud asset resource identifier
///
/// # Examples
///
/// ```
/// use asset_export::domain::ids::ResourceId;
/// use std::str::FromStr;
///
/// let id = ResourceId::from_str("aws|123456789012|i-0abc").unwrap();
/// assert_eq!(id.as_str(), "aws|123456789012|i-0abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Wraps an identifier exactly as the server issued it
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Whether the identifier is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourceId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
