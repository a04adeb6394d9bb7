//! Batched detail hydration
//!
//! IDs are split into consecutive chunks of at most `batch_size` and each
//! chunk costs exactly one entities call, so N IDs always take
//! `ceil(N / batch_size)` calls. A chunk that fails contributes no records
//! and the remaining chunks are still fetched.

use super::settings::{DEFAULT_RATE_LIMIT_DELAY, MAX_BATCH_SIZE};
use super::summary::RunStats;
use crate::adapters::falcon::AssetsApi;
use crate::domain::ids::{ResourceId, ResourceRecord};
use std::time::Duration;

/// Log progress every this many batches
const PROGRESS_INTERVAL: usize = 100;

/// What happened to one hydration batch
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// The batch returned `records` records
    Fetched { batch: usize, records: usize },
    /// The batch was skipped
    Failed { batch: usize, reason: String },
}

impl BatchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, BatchOutcome::Failed { .. })
    }
}

/// Records and per-batch outcomes of one [`DetailFetcher::hydrate`] call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hydration {
    pub records: Vec<ResourceRecord>,
    pub outcomes: Vec<BatchOutcome>,
}

impl Hydration {
    pub fn failed_batches(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }
}

/// Hydrates resource IDs into full records
pub struct DetailFetcher<'a> {
    api: &'a dyn AssetsApi,
    batch_size: usize,
    delay: Duration,
}

impl<'a> DetailFetcher<'a> {
    /// `batch_size` is forced into 1..=100
    pub fn new(api: &'a dyn AssetsApi, batch_size: usize) -> Self {
        Self {
            api,
            batch_size: batch_size.clamp(1, MAX_BATCH_SIZE),
            delay: DEFAULT_RATE_LIMIT_DELAY,
        }
    }

    /// Set the pause inserted after every batch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of entities calls needed for `id_count` IDs
    pub fn batch_count(&self, id_count: usize) -> usize {
        id_count.div_ceil(self.batch_size)
    }

    /// Fetch full records for `ids`, one entities call per chunk
    pub async fn hydrate(&self, ids: &[ResourceId], stats: &mut RunStats) -> Hydration {
        let total_batches = self.batch_count(ids.len());
        let mut hydration = Hydration::default();

        tracing::debug!(
            ids = ids.len(),
            batch_size = self.batch_size,
            total_batches,
            "Retrieving resource details"
        );

        for (index, chunk) in ids.chunks(self.batch_size).enumerate() {
            let batch = index + 1;

            stats.api_calls_entities += 1;
            let outcome = match self.fetch_batch(chunk).await {
                Ok(records) => {
                    let count = records.len();
                    stats.resources_retrieved += count;
                    hydration.records.extend(records);

                    if batch % PROGRESS_INTERVAL == 0 || batch == total_batches {
                        tracing::info!(
                            batch,
                            total_batches,
                            retrieved = hydration.records.len(),
                            "Batch {batch}/{total_batches}: retrieved {} resources",
                            hydration.records.len()
                        );
                    }
                    BatchOutcome::Fetched {
                        batch,
                        records: count,
                    }
                }
                Err(reason) => {
                    stats.failed_batches += 1;
                    tracing::error!(
                        batch,
                        total_batches,
                        error = %reason,
                        "Batch {batch}/{total_batches}: error, skipping"
                    );
                    BatchOutcome::Failed { batch, reason }
                }
            };
            hydration.outcomes.push(outcome);

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        hydration
    }

    async fn fetch_batch(&self, chunk: &[ResourceId]) -> Result<Vec<ResourceRecord>, String> {
        let response = self
            .api
            .get_assets(chunk)
            .await
            .map_err(|e| e.to_string())?;

        if !response.is_success() {
            return Err(response.error_summary());
        }
        Ok(response.body.resources)
    }
}
