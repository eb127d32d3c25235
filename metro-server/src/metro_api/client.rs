//! Metro API HTTP client.
//!
//! Fetches the route and station lists from an upstream API that serves
//! `GET {base}/routes` and `GET {base}/stations`, each wrapped in a
//! `{ "data": [...] }` envelope.

use futures::future::try_join;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::network::{DataEnvelope, RouteRecord, StationRecord, TransitNetwork};

use super::error::MetroApiError;

/// Default base URL for the LA Metro API.
const DEFAULT_BASE_URL: &str = "https://api.metro.net";

/// Configuration for the Metro API client.
#[derive(Debug, Clone, PartialEq)]
pub struct MetroClientConfig {
    /// Optional API key for x-apikey header authentication
    pub api_key: Option<String>,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MetroClientConfig {
    /// Create a new config pointing at the default API.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MetroClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the upstream Metro API.
#[derive(Debug, Clone)]
pub struct MetroClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetroClient {
    /// Create a new Metro API client.
    pub fn new(config: MetroClientConfig) -> Result<Self, MetroApiError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| MetroApiError::InvalidApiKey)?;
            headers.insert(HeaderName::from_static("x-apikey"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all routes.
    pub async fn fetch_routes(&self) -> Result<Vec<RouteRecord>, MetroApiError> {
        self.get_data("routes").await
    }

    /// Fetch all stations.
    pub async fn fetch_stations(&self) -> Result<Vec<StationRecord>, MetroApiError> {
        self.get_data("stations").await
    }

    /// Fetch routes and stations concurrently and build a network from them.
    pub async fn fetch_network(&self) -> Result<TransitNetwork, MetroApiError> {
        let (routes, stations) = try_join(self.fetch_routes(), self.fetch_stations()).await?;
        debug!(
            routes = routes.len(),
            stations = stations.len(),
            "fetched dataset from Metro API"
        );
        Ok(TransitNetwork::from_records(stations, routes)?)
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, MetroApiError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MetroApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetroApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_envelope(&body)
    }
}

/// Parse a `{ "data": ... }` response body.
fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, MetroApiError> {
    let envelope: DataEnvelope<T> =
        serde_json::from_str(body).map_err(|e| MetroApiError::Json {
            message: e.to_string(),
        })?;
    Ok(envelope.data)
}
