//! Cloud Security Assets API trait
//!
//! The export pipeline only talks to the API through [`AssetsApi`], so tests
//! can drive it with an in-memory fake and the production client stays a
//! thin HTTP wrapper.

use super::models::{ApiResponse, EntitiesBody, QueryBody, QueryRequest};
use crate::domain::ids::ResourceId;
use crate::domain::Result;
use async_trait::async_trait;

/// Operations of the Cloud Security Assets API used by the exporter
///
/// Implementations own authentication, TLS and request signing. An `Err`
/// means the call could not be completed at all (transport failure, garbled
/// body); a completed call with a non-200 status is returned as `Ok` with
/// [`ApiResponse::is_success`] false.
///
/// # Example
///
/// ```no_run
/// use asset_export::adapters::falcon::{AssetsApi, FalconClient, QueryRequest};
/// use asset_export::config::load_config;
///
/// # async fn example() -> asset_export::domain::Result<()> {
/// let client = FalconClient::connect(load_config()?).await?;
///
/// let page = client.query_assets(&QueryRequest::new(10)).await?;
/// if page.is_success() {
///     let records = client.get_assets(&page.body.resources).await?;
///     println!("Hydrated {} records", records.body.resources.len());
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait AssetsApi: Send + Sync {
    /// Query one page of resource IDs
    async fn query_assets(&self, request: &QueryRequest) -> Result<ApiResponse<QueryBody>>;

    /// Fetch full records for up to 100 resource IDs
    async fn get_assets(&self, ids: &[ResourceId]) -> Result<ApiResponse<EntitiesBody>>;

    /// Base URL of the API
    fn base_url(&self) -> &str;
}
