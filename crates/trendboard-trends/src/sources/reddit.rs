//! Reddit public JSON listing client (no authentication).

use reqwest::Client;

use crate::error::TrendError;
use crate::raw::Listing;

use super::{build_http_client, get_json, normalize_base_url};

const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// Client for Reddit's public JSON listings. No credentials are needed.
///
/// Use [`RedditClient::new`] for production or [`RedditClient::with_base_url`]
/// to point at a mock server in tests.
pub struct RedditClient {
    client: Client,
    base_url: String,
}

impl RedditClient {
    /// Reddit rejects requests without a descriptive user agent, so one is
    /// always set.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, TrendError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Client pointed at a custom base URL (for wiremock tests).
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, TrendError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            base_url: normalize_base_url(base_url),
        })
    }

    /// Fetch the hot listing of one subreddit.
    ///
    /// # Errors
    ///
    /// - [`TrendError::Http`] on network failure or non-2xx status.
    /// - [`TrendError::Deserialize`] if the body is not a listing.
    pub async fn hot_posts(&self, subreddit: &str, limit: u32) -> Result<Listing, TrendError> {
        let request = self
            .client
            .get(format!("{}/r/{subreddit}/hot.json", self.base_url))
            .query(&[("limit", limit.to_string())]);

        get_json(request, &format!("reddit hot(r/{subreddit})")).await
    }
}
