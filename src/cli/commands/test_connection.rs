//! Test-connection command implementation
//!
//! Checks credentials, authenticates and issues one small ID query so
//! operators can verify access before a long export.

use super::run_until_shutdown;
use crate::adapters::falcon::{AssetsApi, FalconClient, QueryRequest};
use crate::config::load_config;
use clap::Args;
use tokio::sync::watch;

/// IDs requested by the probe query
const PROBE_LIMIT: u32 = 10;

const RULE_WIDTH: usize = 60;

/// Arguments for the test-connection command
#[derive(Args, Debug, Default)]
pub struct TestConnectionArgs {}

impl TestConnectionArgs {
    /// Execute the test-connection command
    pub async fn execute(&self, shutdown_signal: watch::Receiver<bool>) -> anyhow::Result<i32> {
        tracing::info!("Starting connection test");

        let rule = "=".repeat(RULE_WIDTH);
        println!("{rule}");
        println!("CrowdStrike API Connection Test");
        println!("{rule}");

        match run_until_shutdown(run_checks(), shutdown_signal).await {
            Some(true) => {
                println!();
                println!("{rule}");
                println!("✓ All tests passed! You're ready to export assets.");
                println!("{rule}");
                println!();
                println!("Next steps:");
                println!("  asset-export export --filter \"cloud_provider:'aws'\"");
                println!("  asset-export stream --help");
                Ok(0)
            }
            Some(false) => Ok(1),
            None => {
                println!();
                println!("Test interrupted by user");
                Ok(1)
            }
        }
    }
}

async fn run_checks() -> bool {
    println!();
    println!("1. Checking credentials...");
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            println!("   ✗ {e}");
            return false;
        }
    };
    println!("   ✓ Client ID: {}", config.masked_client_id());
    println!("   ✓ Base URL: {}", config.base_url);

    println!();
    println!("2. Testing authentication...");
    let client = match FalconClient::connect(config).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Authentication failed");
            println!("   ✗ Authentication failed: {e}");
            return false;
        }
    };
    println!("   ✓ Authentication successful");

    println!();
    println!("3. Testing API call (querying first {PROBE_LIMIT} resources)...");
    probe_query(&client).await
}

/// Issue one small ID query and print what came back
async fn probe_query(api: &dyn AssetsApi) -> bool {
    match api.query_assets(&QueryRequest::new(PROBE_LIMIT)).await {
        Ok(response) if response.is_success() => {
            let ids = &response.body.resources;
            println!("   ✓ API call successful");
            println!("   ✓ Retrieved {} resource IDs", ids.len());
            if let Some(sample) = ids.first() {
                println!("   ✓ Sample ID: {sample}");
            }
            true
        }
        Ok(response) => {
            println!("   ✗ API call failed with status {}", response.status_code);
            println!("   Error: {}", response.error_summary());
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "Probe query failed");
            println!("   ✗ API call failed: {e}");
            false
        }
    }
}
