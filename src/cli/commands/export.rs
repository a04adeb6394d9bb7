//! Export command implementation
//!
//! Buffered export: every ID is collected and hydrated before the output
//! file is written in one pass.

use super::run_export;
use crate::core::export::{
    ExportMode, ExportSettings, DEFAULT_OUTPUT, MAX_BATCH_SIZE, MAX_QUERY_LIMIT,
};
use clap::Args;
use std::path::PathBuf;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// FQL filter string (e.g. "cloud_provider:'aws'")
    #[arg(long)]
    pub filter: Option<String>,

    /// Output JSON file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// IDs per query request (max 1000)
    #[arg(long, default_value_t = MAX_QUERY_LIMIT)]
    pub limit: u32,

    /// IDs per entities request (max 100)
    #[arg(long, default_value_t = MAX_BATCH_SIZE)]
    pub batch_size: usize,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExportArgs {
    /// Settings for a buffered run; clamping is left to the run path
    pub fn settings(&self) -> ExportSettings {
        ExportSettings::new(ExportMode::Buffered, self.output.clone())
            .with_filter(self.filter.clone())
            .with_limit(self.limit)
            .with_batch_size(self.batch_size)
    }

    /// Execute the export command
    pub async fn execute(&self, shutdown_signal: watch::Receiver<bool>) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");
        run_export(self.settings(), shutdown_signal).await
    }
}
