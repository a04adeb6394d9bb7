//! Domain models and types for the exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ResourceId`])
//! - **Pass-through records** ([`ResourceRecord`])
//! - **Error types** ([`ExporterError`], [`ApiError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ExporterError>`]:
//!
//! ```rust
//! use asset_export::domain::{ExporterError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = asset_export::config::load_config()?;
//!     println!("{}", config.base_url);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod result;

pub use errors::{ApiError, ExporterError};
pub use ids::{ResourceId, ResourceRecord};
pub use result::Result;
