//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Asset Export - CrowdStrike cloud security asset exporter
#[derive(Parser, Debug)]
#[command(name = "asset-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info", env = "ASSET_EXPORT_LOG_LEVEL")]
    pub log_level: String,

    /// Directory for JSON log files (file logging is off when unset)
    #[arg(long, global = true, env = "ASSET_EXPORT_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Console log level after applying `export --verbose`
    pub fn effective_log_level(&self) -> &str {
        match &self.command {
            Commands::Export(args) if args.verbose => "debug",
            _ => &self.log_level,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export all matching assets, writing the output file once at the end
    Export(commands::export::ExportArgs),

    /// Export all matching assets, appending to the output file page by page
    Stream(commands::stream::StreamArgs),

    /// Verify credentials and API access
    TestConnection(commands::test_connection::TestConnectionArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export_defaults() {
        let cli = Cli::parse_from(["asset-export", "export"]);
        assert_eq!(cli.log_level, "info");
        assert!(cli.log_dir.is_none());

        let Commands::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert!(args.filter.is_none());
        assert_eq!(args.output, PathBuf::from("cloud_assets.json"));
        assert_eq!(args.limit, 1000);
        assert_eq!(args.batch_size, 100);
        assert!(!args.verbose);
    }

    #[test]
    fn test_cli_parse_export_with_options() {
        let cli = Cli::parse_from([
            "asset-export",
            "export",
            "--filter",
            "cloud_provider:'aws'",
            "--output",
            "aws.json",
            "--limit",
            "250",
            "--batch-size",
            "500",
        ]);

        let Commands::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.filter.as_deref(), Some("cloud_provider:'aws'"));
        assert_eq!(args.output, PathBuf::from("aws.json"));
        assert_eq!(args.limit, 250);
        assert_eq!(args.batch_size, 500);
    }

    #[test]
    fn test_cli_verbose_raises_log_level() {
        let cli = Cli::parse_from(["asset-export", "export", "--verbose"]);
        assert_eq!(cli.effective_log_level(), "debug");

        let cli = Cli::parse_from(["asset-export", "--log-level", "warn", "stream"]);
        assert_eq!(cli.effective_log_level(), "warn");
    }

    #[test]
    fn test_cli_parse_stream() {
        let cli = Cli::parse_from(["asset-export", "stream", "--limit", "10"]);
        let Commands::Stream(args) = cli.command else {
            panic!("expected stream command");
        };
        assert_eq!(args.limit, 10);
        assert_eq!(args.output, PathBuf::from("cloud_assets.json"));
    }

    #[test]
    fn test_cli_stream_rejects_batch_size() {
        let result = Cli::try_parse_from(["asset-export", "stream", "--batch-size", "50"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_test_connection() {
        let cli = Cli::parse_from(["asset-export", "test-connection"]);
        assert!(matches!(cli.command, Commands::TestConnection(_)));
    }

    #[test]
    fn test_cli_global_log_dir_after_subcommand() {
        let cli = Cli::parse_from(["asset-export", "export", "--log-dir", "logs"]);
        assert_eq!(cli.log_dir, Some(PathBuf::from("logs")));
    }
}
