//! Stream command implementation
//!
//! Streaming export: each ID page is hydrated and appended to the output
//! file before the next page is requested. The hydration batch size is fixed
//! at the API maximum.

use super::run_export;
use crate::core::export::{ExportMode, ExportSettings, DEFAULT_OUTPUT, MAX_QUERY_LIMIT};
use clap::Args;
use std::path::PathBuf;
use tokio::sync::watch;

/// Arguments for the stream command
#[derive(Args, Debug)]
pub struct StreamArgs {
    /// FQL filter string (e.g. "cloud_provider:'aws'")
    #[arg(long)]
    pub filter: Option<String>,

    /// Output JSON file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// IDs per query request (max 1000)
    #[arg(long, default_value_t = MAX_QUERY_LIMIT)]
    pub limit: u32,
}

impl StreamArgs {
    pub fn settings(&self) -> ExportSettings {
        ExportSettings::new(ExportMode::Streaming, self.output.clone())
            .with_filter(self.filter.clone())
            .with_limit(self.limit)
    }

    /// Execute the stream command
    pub async fn execute(&self, shutdown_signal: watch::Receiver<bool>) -> anyhow::Result<i32> {
        tracing::info!("Starting stream command");
        run_export(self.settings(), shutdown_signal).await
    }
}
