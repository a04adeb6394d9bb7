// Asset Export - CrowdStrike Cloud Security Assets Exporter
// Copyright (c) 2025 Asset Export Contributors
// Licensed under the MIT License

use asset_export::cli::{Cli, Commands};
use asset_export::config::LoggingConfig;
use asset_export::logging::init_logging;
use clap::Parser;
use std::process;
use tokio::sync::watch;

#[tokio::main]
async fn main() {
    // Values in .env take precedence over the inherited environment
    let _ = dotenvy::dotenv_override();

    let cli = Cli::parse();

    let logging_config = match &cli.log_dir {
        Some(dir) => LoggingConfig::with_file(dir.to_string_lossy()),
        None => LoggingConfig::console_only(),
    };
    let guard = match init_logging(cli.effective_log_level(), &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(1);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Asset Export - CrowdStrike Cloud Security Assets Exporter"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                    if tokio::signal::ctrl_c().await.is_ok() {
                        tracing::info!("Received SIGINT (Ctrl+C), shutting down");
                        let _ = shutdown_tx.send(true);
                    }
                    return;
                }
            };

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received SIGINT (Ctrl+C), shutting down");
                }
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, shutting down");
                }
            }
            let _ = shutdown_tx.send(true);
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            } else {
                tracing::info!("Received SIGINT (Ctrl+C), shutting down");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    let exit_code = match execute_command(&cli, shutdown_rx).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    // Flush the file writer before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, shutdown_signal: watch::Receiver<bool>) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(shutdown_signal).await,
        Commands::Stream(args) => args.execute(shutdown_signal).await,
        Commands::TestConnection(args) => args.execute(shutdown_signal).await,
    }
}
