//! Cloud Security Assets API models
//!
//! Request and response structures for the Falcon query and entities
//! endpoints. Only the fields the exporter needs are modelled; asset records
//! themselves stay raw JSON.

use crate::domain::ids::{ResourceId, ResourceRecord};
use serde::{Deserialize, Deserializer, Serialize};

/// Parameters for one call to the query endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// Maximum number of IDs to return (1-1000)
    pub limit: u32,

    /// Optional FQL filter, passed through verbatim
    pub filter: Option<String>,

    /// Cursor from the previous page's `meta.next`
    pub after: Option<String>,
}

impl QueryRequest {
    /// Create a first-page request
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            filter: None,
            after: None,
        }
    }

    /// Set the FQL filter
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    /// Set the pagination cursor
    pub fn with_after(mut self, after: Option<String>) -> Self {
        self.after = after;
        self
    }

    /// Query string pairs in the order the API documents them
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("limit", self.limit.to_string())];
        if let Some(filter) = &self.filter {
            pairs.push(("filter", filter.clone()));
        }
        if let Some(after) = &self.after {
            pairs.push(("after", after.clone()));
        }
        pairs
    }
}

/// Pagination block of the query response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryPagination {
    /// Page size honoured by the server
    #[serde(default)]
    pub limit: Option<u32>,

    /// Total number of matching resources
    #[serde(default)]
    pub total: Option<u64>,
}

/// Metadata of the query response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryMeta {
    /// Server-side trace ID
    #[serde(default)]
    pub trace_id: Option<String>,

    /// Pagination details
    #[serde(default)]
    pub pagination: Option<QueryPagination>,

    /// Cursor for the next page; absent or empty on the last page
    #[serde(default)]
    pub next: Option<String>,
}

/// Body of a successful query response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryBody {
    #[serde(default)]
    pub meta: QueryMeta,

    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<ResourceId>,
}

impl QueryBody {
    /// The cursor for the next request, with empty strings treated as absent
    pub fn next_cursor(&self) -> Option<&str> {
        self.meta.next.as_deref().filter(|next| !next.is_empty())
    }

    /// Total number of matching resources, if reported
    pub fn total(&self) -> Option<u64> {
        self.meta.pagination.as_ref().and_then(|p| p.total)
    }
}

/// Metadata of the entities response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntitiesMeta {
    #[serde(default)]
    pub trace_id: Option<String>,
}

/// Body of a successful entities response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntitiesBody {
    #[serde(default)]
    pub meta: EntitiesMeta,

    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<ResourceRecord>,
}

/// One entry of the API's `errors` array
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<i64>,

    #[serde(default)]
    pub message: String,
}

/// Error envelope shared by all Falcon responses
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ApiErrorDetail>,
}

/// Decoded API response
///
/// A non-200 status is not an `Err`: the caller decides whether the failure
/// stops pagination or only skips a batch. `body` is the default value and
/// `errors` carries the server's messages in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub body: T,
    pub errors: Vec<ApiErrorDetail>,
}

impl<T> ApiResponse<T> {
    /// A 200 response
    pub fn ok(body: T) -> Self {
        Self {
            status_code: 200,
            body,
            errors: Vec::new(),
        }
    }

    /// A failed response with an empty body
    pub fn failure(status_code: u16, errors: Vec<ApiErrorDetail>) -> Self
    where
        T: Default,
    {
        Self {
            status_code,
            body: T::default(),
            errors,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }

    /// Human-readable summary of the response errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return format!("HTTP {}", self.status_code);
        }
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|e| match e.code {
                Some(code) => format!("[{code}] {}", e.message),
                None => e.message.clone(),
            })
            .collect();
        format!("HTTP {}: {}", self.status_code, messages.join("; "))
    }
}

/// OAuth2 token response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,

    /// Lifetime in seconds
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,

    #[serde(default)]
    pub token_type: Option<String>,
}

fn default_expires_in() -> i64 {
    1799
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
