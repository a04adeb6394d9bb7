//! Falcon HTTP client
//!
//! Implements [`AssetsApi`] on top of `reqwest`, including OAuth2
//! client-credentials token acquisition and refresh.

use super::api::AssetsApi;
use super::models::{
    ApiErrorDetail, ApiResponse, EntitiesBody, ErrorEnvelope, QueryBody, QueryRequest,
    TokenResponse,
};
use crate::config::{secret_string, ApiConfig, SecretString};
use crate::domain::ids::ResourceId;
use crate::domain::{ApiError, ExporterError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use reqwest::header::ACCEPT;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::RwLock;

const TOKEN_PATH: &str = "/oauth2/token";
const QUERY_RESOURCES_PATH: &str = "/cloud-security-assets/queries/resources/v1";
const ENTITIES_RESOURCES_PATH: &str = "/cloud-security-assets/entities/resources/v1";

/// Refresh this long before the server-side expiry
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// Longest error body echoed back to the operator
const MAX_ERROR_BODY_CHARS: usize = 500;

struct AccessToken {
    value: SecretString,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

/// Cloud Security Assets API client
///
/// # Example
///
/// ```no_run
/// use asset_export::adapters::falcon::FalconClient;
/// use asset_export::config::load_config;
///
/// # async fn example() -> asset_export::domain::Result<()> {
/// let client = FalconClient::connect(load_config()?).await?;
/// assert!(client.is_authenticated().await);
/// # Ok(())
/// # }
/// ```
pub struct FalconClient {
    api_root: String,
    client: Client,
    config: ApiConfig,
    token: RwLock<Option<AccessToken>>,
}

impl FalconClient {
    /// Create an unauthenticated client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!("asset-export/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Request(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_root: config.api_root().to_string(),
            client,
            config,
            token: RwLock::new(None),
        })
    }

    /// Create a client and obtain its first access token
    pub async fn connect(config: ApiConfig) -> Result<Self> {
        let client = Self::new(config)?;
        client.authenticate().await?;
        Ok(client)
    }

    /// Request a new OAuth2 access token
    ///
    /// # Errors
    ///
    /// Returns [`ExporterError::Authentication`] if the credentials are
    /// rejected, or an [`ApiError`] if the token endpoint cannot be reached.
    pub async fn authenticate(&self) -> Result<()> {
        let url = format!("{}{TOKEN_PATH}", self.api_root);
        tracing::debug!(url = %url, "Requesting OAuth2 access token");

        let form = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.expose_secret().as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(&form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            let errors = parse_errors(status, &text);
            let summary = ApiResponse::<()>::failure(status.as_u16(), errors).error_summary();
            tracing::error!(status = status.as_u16(), "Token request rejected");
            return Err(ExporterError::Authentication(summary));
        }

        let token: TokenResponse = serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Malformed token response: {e}"))
        })?;

        let lifetime = (token.expires_in - TOKEN_REFRESH_MARGIN_SECS).max(0);
        let expires_at = Utc::now() + ChronoDuration::seconds(lifetime);

        *self.token.write().await = Some(AccessToken {
            value: secret_string(token.access_token),
            expires_at,
        });

        tracing::info!(
            base_url = %self.api_root,
            expires_at = %expires_at,
            "Authenticated with Falcon API"
        );
        Ok(())
    }

    /// True while a non-expired access token is held
    pub async fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .await
            .as_ref()
            .map(AccessToken::is_valid)
            .unwrap_or(false)
    }

    async fn bearer_token(&self) -> Result<String> {
        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_valid() {
                return Ok(token.value.expose_secret().as_str().to_string());
            }
        }

        tracing::info!("Access token missing or expired, re-authenticating");
        self.authenticate().await?;

        self.token
            .read()
            .await
            .as_ref()
            .map(|token| token.value.expose_secret().as_str().to_string())
            .ok_or_else(|| ExporterError::Authentication("No access token available".to_string()))
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        let token = self.bearer_token().await?;
        let url = format!("{}{path}", self.api_root);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if status == StatusCode::UNAUTHORIZED {
            // Force a fresh token on the next call; this call is not retried.
            *self.token.write().await = None;
        }

        if status != StatusCode::OK {
            tracing::debug!(url = %url, status = status.as_u16(), "API call returned failure status");
            return Ok(ApiResponse::failure(
                status.as_u16(),
                parse_errors(status, &text),
            ));
        }

        let body: T = serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("{url}: {e}")))?;
        Ok(ApiResponse::ok(body))
    }
}

#[async_trait]
impl AssetsApi for FalconClient {
    async fn query_assets(&self, request: &QueryRequest) -> Result<ApiResponse<QueryBody>> {
        self.get_json(QUERY_RESOURCES_PATH, &request.to_query_pairs())
            .await
    }

    async fn get_assets(&self, ids: &[ResourceId]) -> Result<ApiResponse<EntitiesBody>> {
        let query: Vec<(&str, String)> = ids
            .iter()
            .map(|id| ("ids", id.as_str().to_string()))
            .collect();
        self.get_json(ENTITIES_RESOURCES_PATH, &query).await
    }

    fn base_url(&self) -> &str {
        &self.api_root
    }
}

fn transport_error(err: reqwest::Error) -> ExporterError {
    let api_err = if err.is_timeout() {
        ApiError::Timeout(err.to_string())
    } else if err.is_connect() {
        ApiError::ConnectionFailed(err.to_string())
    } else {
        ApiError::Request(err.to_string())
    };
    api_err.into()
}

/// Extract the `errors` array, falling back to the raw body text
fn parse_errors(status: StatusCode, text: &str) -> Vec<ApiErrorDetail> {
    let envelope: ErrorEnvelope = serde_json::from_str(text).unwrap_or_default();
    if !envelope.errors.is_empty() {
        return envelope.errors;
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    vec![ApiErrorDetail {
        code: Some(i64::from(status.as_u16())),
        message: trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }]
}
