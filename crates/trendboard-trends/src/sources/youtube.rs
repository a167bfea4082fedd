//! YouTube Data API v3 client (most-popular chart).

use reqwest::Client;

use crate::error::TrendError;
use crate::raw::VideoListResponse;

use super::{build_http_client, get_json, normalize_base_url};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Client for the YouTube Data API v3.
///
/// Holds the API key sent with every request. Use [`YouTubeClient::new`] for
/// production or [`YouTubeClient::with_base_url`] to point at a mock server
/// in tests.
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// # Errors
    ///
    /// Returns [`TrendError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, TrendError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Client pointed at a custom base URL (for wiremock tests).
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

    /// Fetch the most-popular chart for `region_code` with snippets and
    /// statistics.
    ///
    /// # Errors
    ///
    /// - [`TrendError::Http`] on network failure or non-2xx status.
    /// - [`TrendError::Deserialize`] if the body is not the expected JSON.
    pub async fn trending_videos(
        &self,
        region_code: &str,
        max_results: u32,
    ) -> Result<VideoListResponse, TrendError> {
        let max_results = max_results.to_string();
        let request = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "snippet,statistics"),
                ("chart", "mostPopular"),
                ("regionCode", region_code),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ]);

        let response: VideoListResponse =
            get_json(request, &format!("youtube videos(region={region_code})")).await?;

        tracing::debug!(
            region = region_code,
            count = response.items.as_ref().map_or(0, Vec::len),
            "fetched YouTube trending videos"
        );
        Ok(response)
    }
}
