//! Export coordinator - orchestrates one export run
//!
//! Buffered runs drain the paginator, hydrate the full ID set and write once.
//! Streaming runs hydrate and append page by page, keeping memory bounded by
//! one page of records.

use super::fetcher::DetailFetcher;
use super::paginator::IdPaginator;
use super::settings::{ExportMode, ExportSettings};
use super::summary::RunStats;
use super::writer::{write_buffered, StreamingJsonWriter};
use crate::adapters::falcon::AssetsApi;
use crate::domain::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// How an export run ended
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// The output file was written
    Completed {
        records_written: usize,
        output: PathBuf,
        bytes_written: u64,
    },
    /// The ID query yielded nothing; no file was written
    NoResources,
    /// IDs were found but no details could be retrieved; no file was written
    NoDetails,
}

/// Export coordinator
pub struct ExportCoordinator {
    api: Arc<dyn AssetsApi>,
    settings: ExportSettings,
}

impl ExportCoordinator {
    /// Create a coordinator, clamping the settings into API limits
    pub fn new(api: Arc<dyn AssetsApi>, mut settings: ExportSettings) -> Self {
        for warning in settings.normalize() {
            tracing::warn!("{warning}");
        }
        Self { api, settings }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Execute the export
    ///
    /// Counters are bumped on `stats` as calls complete, so a caller that
    /// abandons this future still holds the partial numbers. Only file-system
    /// failures surface as errors; API failures are absorbed and counted.
    pub async fn execute(&self, stats: &mut RunStats) -> Result<ExportOutcome> {
        tracing::info!(
            mode = %self.settings.mode,
            base_url = %self.api.base_url(),
            filter = self.settings.filter.as_deref().unwrap_or("None"),
            output = %self.settings.output.display(),
            limit = self.settings.limit,
            batch_size = self.settings.batch_size,
            "Starting export"
        );

        let outcome = match self.settings.mode {
            ExportMode::Buffered => self.run_buffered(stats).await,
            ExportMode::Streaming => self.run_streaming(stats).await,
        };

        match &outcome {
            Ok(ExportOutcome::Completed {
                records_written, ..
            }) => {
                tracing::info!(records_written, "Export completed");
            }
            Ok(_) => tracing::info!("Export finished without writing output"),
            Err(e) => tracing::error!(error = %e, "Export failed"),
        }
        outcome
    }

    fn paginator(&self) -> IdPaginator<'_> {
        IdPaginator::new(
            &*self.api,
            self.settings.filter.clone(),
            self.settings.limit,
        )
    }

    fn fetcher(&self) -> DetailFetcher<'_> {
        DetailFetcher::new(&*self.api, self.settings.batch_size)
            .with_delay(self.settings.rate_limit_delay)
    }

    async fn run_buffered(&self, stats: &mut RunStats) -> Result<ExportOutcome> {
        tracing::info!("Step 1: Querying resource IDs");
        let ids = self.paginator().collect_all(stats).await;
        if ids.is_empty() {
            tracing::warn!("No resources found");
            return Ok(ExportOutcome::NoResources);
        }

        tracing::info!(count = ids.len(), "Step 2: Retrieving resource details");
        let hydration = self.fetcher().hydrate(&ids, stats).await;
        if hydration.failed_batches() > 0 {
            tracing::warn!(
                failed_batches = hydration.failed_batches(),
                "Some batches failed and were skipped"
            );
        }
        if hydration.records.is_empty() {
            tracing::warn!("No resource details retrieved");
            return Ok(ExportOutcome::NoDetails);
        }

        tracing::info!(
            count = hydration.records.len(),
            "Step 3: Exporting resources to JSON"
        );
        let bytes_written = write_buffered(&self.settings.output, &hydration.records)?;
        stats.resources_written = hydration.records.len();

        Ok(ExportOutcome::Completed {
            records_written: stats.resources_written,
            output: self.settings.output.clone(),
            bytes_written,
        })
    }

    async fn run_streaming(&self, stats: &mut RunStats) -> Result<ExportOutcome> {
        let mut writer = StreamingJsonWriter::create(&self.settings.output)?;
        let mut paginator = self.paginator();
        let fetcher = self.fetcher();

        while let Some(page) = paginator.next_page(stats).await {
            let hydration = fetcher.hydrate(&page.ids, stats).await;
            let written = writer.write_records(&hydration.records)?;
            writer.flush()?;
            stats.resources_written += written;

            tracing::info!(
                page = page.number,
                written,
                total_written = stats.resources_written,
                "Page {} written",
                page.number
            );
        }

        let records_written = writer.records_written();
        writer.finish()?;
        let bytes_written = std::fs::metadata(&self.settings.output)?.len();

        Ok(ExportOutcome::Completed {
            records_written,
            output: self.settings.output.clone(),
            bytes_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::falcon::{ApiResponse, EntitiesBody, QueryBody, QueryRequest};
    use crate::domain::ids::ResourceId;
    use async_trait::async_trait;

    struct EmptyApi;

    #[async_trait]
    impl AssetsApi for EmptyApi {
        async fn query_assets(&self, _request: &QueryRequest) -> Result<ApiResponse<QueryBody>> {
            Ok(ApiResponse::ok(QueryBody::default()))
        }

        async fn get_assets(&self, _ids: &[ResourceId]) -> Result<ApiResponse<EntitiesBody>> {
            Ok(ApiResponse::ok(EntitiesBody::default()))
        }

        fn base_url(&self) -> &str {
            "http://fake"
        }
    }

    #[test]
    fn test_new_clamps_settings() {
        let settings = ExportSettings::new(ExportMode::Buffered, "out.json")
            .with_limit(5000)
            .with_batch_size(0);
        let coordinator = ExportCoordinator::new(Arc::new(EmptyApi), settings);

        assert_eq!(coordinator.settings().limit, 1000);
        assert_eq!(coordinator.settings().batch_size, 1);
    }

    #[tokio::test]
    async fn test_buffered_no_resources_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("out.json");
        let settings = ExportSettings::new(ExportMode::Buffered, &output);
        let coordinator = ExportCoordinator::new(Arc::new(EmptyApi), settings);

        let mut stats = RunStats::new();
        let outcome = coordinator.execute(&mut stats).await.unwrap();

        assert_eq!(outcome, ExportOutcome::NoResources);
        assert_eq!(stats.api_calls_queries, 1);
        assert_eq!(stats.api_calls_entities, 0);
        assert!(!output.exists());
    }
}
