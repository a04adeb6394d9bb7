//! Configuration management.
//!
//! The exporter is configured entirely through environment variables, which
//! may be supplied by a `.env` file in the working directory:
//!
//! ```bash
//! CROWDSTRIKE_CLIENT_ID=your-client-id
//! CROWDSTRIKE_CLIENT_SECRET=your-client-secret
//! CROWDSTRIKE_BASE_URL=https://api.crowdstrike.com   # optional
//! CROWDSTRIKE_TIMEOUT_SECONDS=60                     # optional
//! ```
//!
//! Values in `.env` take precedence over variables already present in the
//! process environment.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use asset_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! println!("Falcon API: {}", config.base_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_with};
pub use schema::{ApiConfig, LoggingConfig, DEFAULT_BASE_URL};
pub use secret::{secret_string, SecretString, SecretValue};
