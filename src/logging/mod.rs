//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console output on stderr
//! - Configurable log levels, with `RUST_LOG` taking precedence
//! - Optional JSON file logging with rotation
//!
//! Operator-facing output (banner, statistics table) goes to stdout through
//! `println!` and is not routed through `tracing`.
//!
//! # Example
//!
//! ```no_run
//! use asset_export::config::LoggingConfig;
//! use asset_export::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(page = 1, count = 1000, "Got IDs");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};
