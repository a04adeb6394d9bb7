//! CLI command implementations
//!
//! `export` and `stream` share one run path that differs only in
//! [`ExportMode`]; `test-connection` is a standalone diagnostic.

pub mod export;
pub mod stream;
pub mod test_connection;

use crate::adapters::falcon::{AssetsApi, FalconClient};
use crate::config::{load_config, ApiConfig};
use crate::core::export::{bytes_to_mb, ExportCoordinator, ExportOutcome, ExportSettings, RunStats};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

const BANNER_WIDTH: usize = 60;

/// Run `task` until it completes or the shutdown signal fires
///
/// Returns `None` when interrupted; `task` is dropped at its current await
/// point. A closed channel is treated as "never interrupted".
pub async fn run_until_shutdown<F, T>(task: F, mut shutdown: watch::Receiver<bool>) -> Option<T>
where
    F: Future<Output = T>,
{
    if *shutdown.borrow() {
        return None;
    }

    let shutdown_requested = async move {
        loop {
            if shutdown.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
            if *shutdown.borrow() {
                return;
            }
        }
    };

    tokio::select! {
        result = task => Some(result),
        _ = shutdown_requested => None,
    }
}

/// Clamp settings, load credentials, run the export and report
pub(crate) async fn run_export(
    mut settings: ExportSettings,
    shutdown: watch::Receiver<bool>,
) -> anyhow::Result<i32> {
    // Clamping happens before authentication so warnings appear first
    for warning in settings.normalize() {
        println!("Warning: {warning}");
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration error");
            eprintln!("Error: {e}");
            eprintln!("Please create a .env file or set environment variables");
            return Ok(1);
        }
    };

    print_banner(&config, &settings);

    let mut stats = RunStats::new();
    stats.start();
    let result = run_until_shutdown(connect_and_export(config, settings, &mut stats), shutdown).await;
    stats.finish();

    Ok(report(result, &stats))
}

async fn connect_and_export(
    config: ApiConfig,
    settings: ExportSettings,
    stats: &mut RunStats,
) -> crate::domain::Result<ExportOutcome> {
    let client: Arc<dyn AssetsApi> = Arc::new(FalconClient::connect(config).await?);
    ExportCoordinator::new(client, settings).execute(stats).await
}

/// Print the outcome and statistics, returning the exit code
fn report(result: Option<crate::domain::Result<ExportOutcome>>, stats: &RunStats) -> i32 {
    stats.log_summary();

    match result {
        None => {
            tracing::warn!("Export interrupted by user signal");
            println!();
            println!("Export interrupted by user");
            println!("{stats}");
            1
        }
        Some(Err(e)) => {
            eprintln!();
            eprintln!("Error during export: {e}");
            println!("{stats}");
            1
        }
        Some(Ok(ExportOutcome::NoResources)) => {
            println!();
            println!("No resources found. Exiting.");
            0
        }
        Some(Ok(ExportOutcome::NoDetails)) => {
            println!();
            println!("No resource details retrieved. Exiting.");
            0
        }
        Some(Ok(ExportOutcome::Completed {
            records_written,
            output,
            bytes_written,
        })) => {
            println!();
            if let Some(note) = empty_stream_note(records_written, stats) {
                println!("{note}");
            }
            println!("  Successfully exported {records_written} resources");
            println!("  File size: {:.2} MB", bytes_to_mb(bytes_written));
            println!("{stats}");
            if stats.failed_batches > 0 {
                println!(
                    "⚠️  {} batch(es) failed and were skipped; see the log for details",
                    stats.failed_batches
                );
            }
            println!();
            println!("✓ Export complete! Output saved to: {}", output.display());
            0
        }
    }
}

/// A streaming run always leaves a file; say why it holds an empty array
fn empty_stream_note(records_written: usize, stats: &RunStats) -> Option<&'static str> {
    if records_written > 0 {
        return None;
    }
    if stats.ids_retrieved == 0 {
        Some("No resources found. Wrote an empty array.")
    } else {
        Some("No resource details retrieved. Wrote an empty array.")
    }
}

fn print_banner(config: &ApiConfig, settings: &ExportSettings) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("{rule}");
    println!("CrowdStrike Cloud Security Assets Exporter");
    println!("{rule}");
    println!("Base URL: {}", config.base_url);
    println!("Filter: {}", settings.filter.as_deref().unwrap_or("None"));
    println!("Output: {}", settings.output.display());
    println!("Query limit: {}", settings.limit);
    println!("Batch size: {}", settings.batch_size);
    println!("Mode: {}", settings.mode);
    println!("{rule}");
    println!();
}
