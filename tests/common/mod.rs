//! Shared test fixtures: a scripted in-memory assets API

#![allow(dead_code)]

use asset_export::adapters::falcon::{
    ApiErrorDetail, ApiResponse, AssetsApi, EntitiesBody, QueryBody, QueryMeta, QueryRequest,
};
use asset_export::domain::{ApiError, ResourceId, ResourceRecord, Result};
use async_trait::async_trait;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted reply for one query cursor
#[derive(Debug, Clone)]
enum QueryScript {
    Page { ids: Vec<String>, next: Option<String> },
    Status(u16),
    Timeout,
}

/// Every request the fake has received
#[derive(Debug, Default)]
pub struct CallLog {
    pub queries: Vec<QueryRequest>,
    pub entity_batches: Vec<Vec<ResourceId>>,
}

/// In-memory [`AssetsApi`] driven by a cursor script
///
/// Query replies are keyed by the `after` cursor of the request (`None` for
/// the first page). Unscripted cursors get an empty page. Entities calls echo
/// back one record per requested ID unless the call number (1-based) has been
/// marked as failing.
#[derive(Default)]
pub struct FakeAssetsApi {
    pages: HashMap<Option<String>, QueryScript>,
    failing_entity_calls: HashSet<usize>,
    delay: Duration,
    log: Mutex<CallLog>,
}

impl FakeAssetsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `after` with `ids` and cursor `next`
    pub fn with_page(mut self, after: Option<&str>, ids: &[&str], next: Option<&str>) -> Self {
        self.pages.insert(
            after.map(str::to_string),
            QueryScript::Page {
                ids: ids.iter().map(|id| id.to_string()).collect(),
                next: next.map(str::to_string),
            },
        );
        self
    }

    /// Reply to `after` with a failure status
    pub fn with_query_status(mut self, after: Option<&str>, status: u16) -> Self {
        self.pages
            .insert(after.map(str::to_string), QueryScript::Status(status));
        self
    }

    /// Reply to `after` with a transport timeout
    pub fn with_query_timeout(mut self, after: Option<&str>) -> Self {
        self.pages.insert(after.map(str::to_string), QueryScript::Timeout);
        self
    }

    /// Script `total` IDs (`res-0001`, ...) in pages of `page_size`, chained
    /// through cursors `T1`, `T2`, ...
    pub fn with_generated_ids(mut self, total: usize, page_size: usize) -> Self {
        let ids: Vec<String> = (1..=total).map(|n| format!("res-{n:04}")).collect();
        let chunks: Vec<&[String]> = ids.chunks(page_size).collect();

        for (index, chunk) in chunks.iter().enumerate() {
            let after = (index > 0).then(|| format!("T{index}"));
            let next = (index + 1 < chunks.len()).then(|| format!("T{}", index + 1));
            self.pages.insert(
                after,
                QueryScript::Page {
                    ids: chunk.to_vec(),
                    next,
                },
            );
        }
        self
    }

    /// Make the `call`-th entities request (1-based) return HTTP 500
    pub fn fail_entity_call(mut self, call: usize) -> Self {
        self.failing_entity_calls.insert(call);
        self
    }

    /// Sleep this long inside every call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn query_calls(&self) -> usize {
        self.log.lock().unwrap().queries.len()
    }

    pub fn queries(&self) -> Vec<QueryRequest> {
        self.log.lock().unwrap().queries.clone()
    }

    pub fn entity_calls(&self) -> usize {
        self.log.lock().unwrap().entity_batches.len()
    }

    pub fn entity_batch_sizes(&self) -> Vec<usize> {
        self.log
            .lock()
            .unwrap()
            .entity_batches
            .iter()
            .map(Vec::len)
            .collect()
    }
}

/// The record the fake returns for `id`
pub fn record_for(id: &str) -> ResourceRecord {
    json!({
        "id": id,
        "cloud_provider": "aws",
        "resource_type": "AWS::EC2::Instance",
        "active": true,
    })
}

/// Convenience constructor for test IDs
pub fn ids(raw: &[&str]) -> Vec<ResourceId> {
    raw.iter().map(|id| ResourceId::new(*id)).collect()
}

#[async_trait]
impl AssetsApi for FakeAssetsApi {
    async fn query_assets(&self, request: &QueryRequest) -> Result<ApiResponse<QueryBody>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.log.lock().unwrap().queries.push(request.clone());

        match self.pages.get(&request.after) {
            Some(QueryScript::Status(status)) => Ok(ApiResponse::failure(
                *status,
                vec![ApiErrorDetail {
                    code: Some(i64::from(*status)),
                    message: "scripted failure".to_string(),
                }],
            )),
            Some(QueryScript::Timeout) => Err(ApiError::Timeout(
                "operation timed out after 30s".to_string(),
            )
            .into()),
            Some(QueryScript::Page { ids, next }) => Ok(ApiResponse::ok(QueryBody {
                meta: QueryMeta {
                    next: next.clone(),
                    ..QueryMeta::default()
                },
                resources: ids.iter().map(|id| ResourceId::new(id.as_str())).collect(),
            })),
            None => Ok(ApiResponse::ok(QueryBody::default())),
        }
    }

    async fn get_assets(&self, ids: &[ResourceId]) -> Result<ApiResponse<EntitiesBody>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let call = {
            let mut log = self.log.lock().unwrap();
            log.entity_batches.push(ids.to_vec());
            log.entity_batches.len()
        };

        if self.failing_entity_calls.contains(&call) {
            return Ok(ApiResponse::failure(
                500,
                vec![ApiErrorDetail {
                    code: Some(500),
                    message: "internal server error".to_string(),
                }],
            ));
        }

        Ok(ApiResponse::ok(EntitiesBody {
            resources: ids.iter().map(|id| record_for(id.as_str())).collect(),
            ..EntitiesBody::default()
        }))
    }

    fn base_url(&self) -> &str {
        "http://fake.local"
    }
}
