//! External system integrations.
//!
//! - [`falcon`] - CrowdStrike Falcon Cloud Security Assets API
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the export
//! pipeline can be exercised with in-memory implementations:
//!
//! ```rust,no_run
//! use asset_export::adapters::falcon::{AssetsApi, FalconClient};
//! use asset_export::config::load_config;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api: Arc<dyn AssetsApi> = Arc::new(FalconClient::connect(load_config()?).await?);
//! println!("Connected to {}", api.base_url());
//! # Ok(())
//! # }
//! ```

pub mod falcon;
