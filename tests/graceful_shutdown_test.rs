//! Integration tests for interrupting a run
//!
//! These tests verify that:
//! - An interrupted run keeps the statistics gathered so far
//! - A streaming file from an interrupted run is left unclosed
//! - A run that finishes before the signal is unaffected

mod common;

use asset_export::cli::commands::run_until_shutdown;
use asset_export::core::export::{ExportCoordinator, ExportMode, ExportSettings, RunStats};
use common::FakeAssetsApi;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::watch;

#[tokio::test]
async fn test_interrupted_streaming_run_keeps_partial_stats() {
    let api = Arc::new(
        FakeAssetsApi::new()
            .with_generated_ids(50, 10)
            .with_delay(Duration::from_millis(20)),
    );
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("assets.json");
    let settings = ExportSettings::new(ExportMode::Streaming, &output)
        .with_rate_limit_delay(Duration::ZERO);
    let coordinator = ExportCoordinator::new(api.clone(), settings);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let _ = shutdown_tx.send(true);
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let mut stats = RunStats::new();
    stats.start();
    let result = run_until_shutdown(coordinator.execute(&mut stats), shutdown_rx).await;
    stats.finish();

    assert!(result.is_none());
    assert!(stats.api_calls_queries >= 1);
    // 5 pages at 2 calls each take ~200ms, so the run cannot have finished
    assert!(stats.pages < 5);
    assert!(stats.elapsed().is_some());

    let partial = std::fs::read_to_string(&output).unwrap();
    assert!(partial.starts_with('['));
    assert!(!partial.trim_end().ends_with(']'));
}

#[tokio::test]
async fn test_run_finishing_before_signal_completes() {
    let api = Arc::new(FakeAssetsApi::new().with_generated_ids(3, 3));
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("assets.json");
    let settings = ExportSettings::new(ExportMode::Buffered, &output)
        .with_rate_limit_delay(Duration::ZERO);
    let coordinator = ExportCoordinator::new(api, settings);

    let (_shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut stats = RunStats::new();
    let result = run_until_shutdown(coordinator.execute(&mut stats), shutdown_rx).await;

    assert!(matches!(result, Some(Ok(_))));
    assert_eq!(stats.resources_written, 3);
}

#[tokio::test]
async fn test_signal_before_start_skips_run() {
    let api = Arc::new(FakeAssetsApi::new().with_generated_ids(3, 3));
    let settings = ExportSettings::new(ExportMode::Buffered, "never-written.json");
    let coordinator = ExportCoordinator::new(api.clone(), settings);

    let (_shutdown_tx, shutdown_rx) = watch::channel(true);
    let mut stats = RunStats::new();
    let result = run_until_shutdown(coordinator.execute(&mut stats), shutdown_rx).await;

    assert!(result.is_none());
    assert_eq!(api.query_calls(), 0);
    assert_eq!(stats, RunStats::default());
}
