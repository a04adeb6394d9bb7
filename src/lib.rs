// Asset Export - CrowdStrike Cloud Security Assets Exporter
// Copyright (c) 2025 Asset Export Contributors
// Licensed under the MIT License

//! # Asset Export - CrowdStrike Cloud Security Assets Exporter
//!
//! Exports every cloud security asset matching an optional FQL filter into a
//! single JSON array file. Built for very large tenants (millions of records).
//!
//! ## Overview
//!
//! - **Enumerating** resource IDs with cursor pagination, which is not bound
//!   by the API's 10,000 result offset limit
//! - **Hydrating** IDs into full records in batches of at most 100
//! - **Writing** one JSON array, either buffered or page by page
//! - **Reporting** call counts, record counts and elapsed time
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Pagination, hydration, output and orchestration
//! - [`adapters`] - The Falcon Cloud Security Assets API client
//! - [`domain`] - Identifiers, records and errors
//! - [`config`] - Credentials and logging configuration
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use asset_export::adapters::falcon::FalconClient;
//! use asset_export::config::load_config;
//! use asset_export::core::export::{ExportCoordinator, ExportMode, ExportSettings, RunStats};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FalconClient::connect(load_config()?).await?;
//!     let settings = ExportSettings::new(ExportMode::Buffered, "cloud_assets.json");
//!     let coordinator = ExportCoordinator::new(Arc::new(client), settings);
//!
//!     let mut stats = RunStats::new();
//!     coordinator.execute(&mut stats).await?;
//!
//!     println!("Exported {} resources", stats.resources_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], built on
//! [`domain::ExporterError`]. API failures during a run are absorbed and
//! counted in [`core::export::RunStats`]; only configuration, authentication
//! and file-system failures end a run with an error.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
