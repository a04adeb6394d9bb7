//! Configuration loader for the `CROWDSTRIKE_*` environment variables
//!
//! The `.env` file (if any) is applied to the process environment once in
//! `main`, with override semantics, before this loader runs.

use super::schema::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use super::secret::secret_string;
use crate::domain::errors::ExporterError;
use crate::domain::result::Result;

/// Required: OAuth2 client ID
pub const ENV_CLIENT_ID: &str = "CROWDSTRIKE_CLIENT_ID";
/// Required: OAuth2 client secret
pub const ENV_CLIENT_SECRET: &str = "CROWDSTRIKE_CLIENT_SECRET";
/// Optional: API base URL
pub const ENV_BASE_URL: &str = "CROWDSTRIKE_BASE_URL";
/// Optional: request timeout in seconds
pub const ENV_TIMEOUT_SECONDS: &str = "CROWDSTRIKE_TIMEOUT_SECONDS";

/// Loads the API configuration from the process environment
///
/// # Errors
///
/// Returns [`ExporterError::Configuration`] if the credentials are missing or
/// any value fails validation.
///
/// # Examples
///
/// ```no_run
/// use asset_export::config::load_config;
///
/// let config = load_config().expect("credentials must be set");
/// println!("Base URL: {}", config.base_url);
/// ```
pub fn load_config() -> Result<ApiConfig> {
    load_config_with(|name| std::env::var(name).ok())
}

/// Loads the API configuration through an arbitrary variable lookup
///
/// Blank values are treated as unset.
pub fn load_config_with<F>(lookup: F) -> Result<ApiConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let client_id = get(ENV_CLIENT_ID);
    let client_secret = get(ENV_CLIENT_SECRET);

    let (client_id, client_secret) = match (client_id, client_secret) {
        (Some(id), Some(secret)) => (id, secret),
        _ => {
            return Err(ExporterError::Configuration(format!(
                "{ENV_CLIENT_ID} and {ENV_CLIENT_SECRET} must be set"
            )))
        }
    };

    let timeout_seconds = match get(ENV_TIMEOUT_SECONDS) {
        Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
            ExporterError::Configuration(format!("Invalid {ENV_TIMEOUT_SECONDS} '{raw}': {e}"))
        })?,
        None => DEFAULT_TIMEOUT_SECONDS,
    };

    let config = ApiConfig {
        client_id,
        client_secret: secret_string(client_secret),
        base_url: get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        timeout_seconds,
    };

    config.validate().map_err(ExporterError::Configuration)?;

    tracing::debug!(
        base_url = %config.base_url,
        timeout_seconds = config.timeout_seconds,
        "Loaded API configuration"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config_with(lookup(&[
            (ENV_CLIENT_ID, "client"),
            (ENV_CLIENT_SECRET, "secret"),
        ]))
        .unwrap();

        assert_eq!(config.client_id, "client");
        assert!(config.client_secret.expose_secret() == "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_load_config_custom_base_url_and_timeout() {
        let config = load_config_with(lookup(&[
            (ENV_CLIENT_ID, "client"),
            (ENV_CLIENT_SECRET, "secret"),
            (ENV_BASE_URL, "https://api.us-2.crowdstrike.com"),
            (ENV_TIMEOUT_SECONDS, "15"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://api.us-2.crowdstrike.com");
        assert_eq!(config.timeout_seconds, 15);
    }

    #[test]
    fn test_load_config_missing_secret() {
        let result = load_config_with(lookup(&[(ENV_CLIENT_ID, "client")]));
        match result {
            Err(ExporterError::Configuration(msg)) => {
                assert!(msg.contains(ENV_CLIENT_SECRET));
            }
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_blank_id_is_missing() {
        let result = load_config_with(lookup(&[
            (ENV_CLIENT_ID, "  "),
            (ENV_CLIENT_SECRET, "secret"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_blank_base_url_uses_default() {
        let config = load_config_with(lookup(&[
            (ENV_CLIENT_ID, "client"),
            (ENV_CLIENT_SECRET, "secret"),
            (ENV_BASE_URL, ""),
        ]))
        .unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_config_invalid_timeout() {
        let result = load_config_with(lookup(&[
            (ENV_CLIENT_ID, "client"),
            (ENV_CLIENT_SECRET, "secret"),
            (ENV_TIMEOUT_SECONDS, "soon"),
        ]));
        assert!(matches!(result, Err(ExporterError::Configuration(_))));
    }
}
