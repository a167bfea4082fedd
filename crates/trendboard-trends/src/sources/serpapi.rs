//! SerpApi client for Google Trends interest-over-time.

use reqwest::Client;

use crate::error::TrendError;
use crate::raw::InterestResponse;
use crate::types::Platform;

use super::{build_http_client, get_json, normalize_base_url};

const DEFAULT_BASE_URL: &str = "https://serpapi.com/search.json";

/// Client for the SerpApi search endpoint, `google_trends` engine only.
///
/// Use [`SerpApiClient::new`] for production or
/// [`SerpApiClient::with_base_url`] to point at a mock server in tests.
pub struct SerpApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    /// # Errors
    ///
    /// Returns [`TrendError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, TrendError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Client pointed at a custom endpoint (for wiremock tests).
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, TrendError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            api_key: api_key.to_owned(),
            base_url: normalize_base_url(base_url),
        })
    }

    /// Interest-over-time series for one query.
    ///
    /// # Errors
    ///
    /// - [`TrendError::Http`] on network failure or non-2xx status.
    /// - [`TrendError::Api`] if SerpApi reports an error in the body.
    /// - [`TrendError::Deserialize`] if the body is not the expected JSON.
    pub async fn interest_over_time(&self, query: &str) -> Result<InterestResponse, TrendError> {
        let request = self.client.get(&self.base_url).query(&[
            ("engine", "google_trends"),
            ("q", query),
            ("data_type", "TIMESERIES"),
            ("api_key", self.api_key.as_str()),
        ]);

        let response: InterestResponse =
            get_json(request, &format!("serpapi google_trends(q={query})")).await?;

        if let Some(message) = response.error {
            return Err(TrendError::Api {
                platform: Platform::GoogleTrends,
                message,
            });
        }
        Ok(response)
    }
}
