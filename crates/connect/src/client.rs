//! HTTP client for the wallet backend API.
//!
//! The backend owns the heavy lifting (rebalance calculation, period
//! bucketing, current-amount updates); this client only fetches the already
//! aggregated analysis slices and hands them to the core services.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;

use walletdesk_core::analytics::{
    AnalysisQuery, AnalyticsDataSourceTrait, CashFlowRecord, PerformanceRecord, VolumeRecord,
};
use walletdesk_core::errors::{Error, Result};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for the wallet backend.
pub const DEFAULT_API_URL: &str = "https://api.walletdesk.app";

/// Error envelope the backend returns on non-2xx responses.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the wallet backend API.
///
/// # Example
///
/// ```ignore
/// let client = WalletApiClient::new("https://api.walletdesk.app", "your-token")?;
/// let wallets = client.get_performance_wallets().await?;
/// ```
#[derive(Debug, Clone)]
pub struct WalletApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl WalletApiClient {
    /// Create a new wallet API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the backend (e.g., "https://api.walletdesk.app")
    /// * `access_token` - A valid access token for the manager session
    ///
    /// # Errors
    ///
    /// Returns an error if the access token format is invalid or the HTTP
    /// client cannot be initialized.
    pub fn new(base_url: &str, access_token: &str) -> Result<Self> {
        let auth_header = HeaderValue::from_str(&format!("Bearer {}", access_token))
            .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[WalletApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Api(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Parse an HTTP response, handling errors appropriately.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Api(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // Try to parse the error envelope for a better message
            if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                if let Some(msg) = err.message.or(err.error) {
                    return Err(Error::Api(msg));
                }
            }
            return Err(Error::Api(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Api(format!("Failed to parse response: {} - {}", e, body)))
    }
}

/// Builds the `?startDate=...&endDate=...` suffix for the analysis
/// endpoints. Empty when both bounds are open.
fn date_range_query(query: &AnalysisQuery) -> String {
    let mut params = Vec::new();
    if let Some(start) = query.start_date {
        params.push(format!("startDate={}", start.format("%Y-%m-%d")));
    }
    if let Some(end) = query.end_date {
        params.push(format!("endDate={}", end.format("%Y-%m-%d")));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

#[async_trait]
impl AnalyticsDataSourceTrait for WalletApiClient {
    async fn get_performance_wallets(&self) -> Result<Vec<PerformanceRecord>> {
        let wallets: Vec<PerformanceRecord> = self.get("/api/v1/performance/wallets").await?;
        debug!("[WalletApi] Fetched {} wallet performances", wallets.len());
        Ok(wallets)
    }

    async fn get_cash_flow_analysis(&self, query: &AnalysisQuery) -> Result<Vec<CashFlowRecord>> {
        let path = format!("/api/v1/analysis/cash-flow{}", date_range_query(query));
        self.get(&path).await
    }

    async fn get_crypto_volume_analysis(
        &self,
        query: &AnalysisQuery,
    ) -> Result<Vec<VolumeRecord>> {
        let path = format!("/api/v1/analysis/volume{}", date_range_query(query));
        self.get(&path).await
    }
}
