//! Core business logic for the exporter.
//!
//! # Modules
//!
//! - [`export`] - Pagination, hydration, output writing and coordination
//!
//! # Export Workflow
//!
//! 1. **Clamp**: Force limit and batch size into the ranges the API accepts
//! 2. **Paginate**: Walk the `after` cursor to enumerate resource IDs
//! 3. **Hydrate**: Fetch full records in batches of at most 100 IDs
//! 4. **Write**: Emit one JSON array, buffered or page by page
//! 5. **Report**: Print run statistics
//!
//! # Example
//!
//! ```rust,no_run
//! use asset_export::adapters::falcon::FalconClient;
//! use asset_export::config::load_config;
//! use asset_export::core::export::{ExportCoordinator, ExportMode, ExportSettings, RunStats};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let client = FalconClient::connect(config).await?;
//!
//! let settings = ExportSettings::new(ExportMode::Streaming, "cloud_assets.json")
//!     .with_filter(Some("active:true".to_string()));
//! let coordinator = ExportCoordinator::new(Arc::new(client), settings);
//!
//! let mut stats = RunStats::new();
//! stats.start();
//! let outcome = coordinator.execute(&mut stats).await?;
//! stats.finish();
//!
//! println!("{outcome:?}");
//! println!("{stats}");
//! # Ok(())
//! # }
//! ```

pub mod export;
