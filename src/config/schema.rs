//! Configuration schema types

use crate::config::SecretString;
use secrecy::ExposeSecret;
use url::Url;

/// Default Falcon API base URL (US-1 cloud)
pub const DEFAULT_BASE_URL: &str = "https://api.crowdstrike.com";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Falcon API connection settings
///
/// Built from the `CROWDSTRIKE_*` environment variables by
/// [`load_config`](crate::config::load_config).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// OAuth2 API client ID
    pub client_id: String,

    /// OAuth2 API client secret
    /// Stored securely in memory and automatically zeroized on drop
    pub client_secret: SecretString,

    /// Base URL of the Falcon API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl ApiConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are blank or the base URL is not an
    /// absolute http(s) URL
    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.trim().is_empty() || self.client_secret.expose_secret().is_blank() {
            return Err(
                "CROWDSTRIKE_CLIENT_ID and CROWDSTRIKE_CLIENT_SECRET must be set".to_string(),
            );
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid CROWDSTRIKE_BASE_URL '{}': {e}", self.base_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "CROWDSTRIKE_BASE_URL must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("CROWDSTRIKE_TIMEOUT_SECONDS must be > 0".to_string());
        }

        Ok(())
    }

    /// Base URL without a trailing slash, ready for path concatenation
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Client ID shortened for display (first 8 characters)
    pub fn masked_client_id(&self) -> String {
        let prefix: String = self.client_id.chars().take(8).collect();
        format!("{prefix}...")
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    pub file_enabled: bool,

    /// Directory for log files
    pub file_path: String,

    /// Log rotation strategy (daily, hourly, never)
    pub file_rotation: String,
}

impl LoggingConfig {
    /// Console-only logging
    pub fn console_only() -> Self {
        Self {
            file_enabled: false,
            ..Self::default()
        }
    }

    /// Console logging plus JSON files in `dir`
    pub fn with_file(dir: impl Into<String>) -> Self {
        Self {
            file_enabled: true,
            file_path: dir.into(),
            ..Self::default()
        }
    }

    /// Validates the logging configuration
    pub fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.file_rotation.as_str()) {
            return Err(format!(
                "Invalid log rotation '{}'. Must be one of: {}",
                self.file_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.file_enabled && self.file_path.trim().is_empty() {
            return Err("Log directory cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            file_path: "logs".to_string(),
            file_rotation: "daily".to_string(),
        }
    }
}
