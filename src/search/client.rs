//! HTTP client for the web-search collaborator

use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::Config;
use crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST;
use crate::error::AppError;
use crate::search::response::SearchResponse;

/// Client for the external search service. Wraps a pooled `reqwest::Client`
/// configured from the application config and exposes a single synchronous
/// "run query, get text" call.
///
/// No retries happen here. A failed query surfaces as an error for the tool
/// boundary to stringify; retry and backoff belong to the orchestrator.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SearchClient {
    /// Creates a search client from the application configuration.
    ///
    /// The underlying HTTP client uses connection pooling and the configured
    /// request timeout.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.search_endpoint.clone(),
            api_key: config.search_api_key.clone(),
        })
    }

    /// Runs a search query and returns the flattened text of the results.
    ///
    /// # Errors
    /// Maps HTTP failures to the specific `AppError` variants: 401 for a bad
    /// key, 404, 429 for rate limiting, other 4xx/5xx, network timeout and
    /// connection errors, and malformed/empty response bodies.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<String, AppError> {
        info!("Running search query: {query}");

        let response = match self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&json!({ "q": query }))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                error!("Search request failed: {e}");
                return if e.is_timeout() {
                    Err(AppError::network_timeout(&self.endpoint))
                } else if e.is_connect() {
                    Err(AppError::network_connection(&self.endpoint, e.to_string()))
                } else {
                    Err(AppError::ApiFetch(e))
                };
            }
        };

        let status = response.status();
        debug!("Search response status: {status}");

        if !status.is_success() {
            let status_code = status.as_u16();
            let reason = status.canonical_reason().unwrap_or("Unknown error");

            error!("HTTP {} - {} (URL: {})", status_code, reason, self.endpoint);

            return Err(match status_code {
                401 => AppError::api_unauthorized(&self.endpoint),
                404 => AppError::api_not_found(&self.endpoint),
                429 => AppError::api_rate_limit(reason, &self.endpoint),
                400..=499 => AppError::api_client_error(status_code, reason, &self.endpoint),
                _ => AppError::api_server_error(status_code, reason, &self.endpoint),
            });
        }

        let response_text = response.text().await.map_err(AppError::ApiFetch)?;
        debug!("Search response length: {} bytes", response_text.len());

        if response_text.trim().is_empty() {
            return Err(AppError::api_no_data(
                "Response body is empty",
                &self.endpoint,
            ));
        }

        let parsed: SearchResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse search response: {e}");
            AppError::api_malformed_json(e.to_string(), &self.endpoint)
        })?;

        Ok(parsed.to_text())
    }
}
