//! Hacker News Firebase API client.

use futures::stream::{self, StreamExt};
use reqwest::Client;

use crate::error::TrendError;
use crate::raw::HnItem;

use super::{build_http_client, get_json, normalize_base_url};

const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Item requests in flight at once.
const MAX_CONCURRENT_ITEMS: usize = 8;

/// Client for the Hacker News Firebase API.
///
/// Use [`HackerNewsClient::new`] for production or
/// [`HackerNewsClient::with_base_url`] to point at a mock server in tests.
pub struct HackerNewsClient {
    client: Client,
    base_url: String,
}

impl HackerNewsClient {
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

    /// IDs of the current top stories, truncated to `limit`.
    ///
    /// # Errors
    ///
    /// - [`TrendError::Http`] on network failure or non-2xx status.
    /// - [`TrendError::Deserialize`] if the body is not an ID array.
    pub async fn top_story_ids(&self, limit: u32) -> Result<Vec<u64>, TrendError> {
        let request = self
            .client
            .get(format!("{}/topstories.json", self.base_url));
        let mut ids: Vec<u64> = get_json(request, "hackernews topstories").await?;
        ids.truncate(limit as usize);
        Ok(ids)
    }

    /// A single item; `Ok(None)` when the API returns `null` (deleted item).
    ///
    /// # Errors
    ///
    /// - [`TrendError::Http`] on network failure or non-2xx status.
    /// - [`TrendError::Deserialize`] if the body is not an item.
    pub async fn item(&self, id: u64) -> Result<Option<HnItem>, TrendError> {
        let request = self
            .client
            .get(format!("{}/item/{id}.json", self.base_url));
        get_json(request, &format!("hackernews item({id})")).await
    }

    /// Top stories with full details, in ranking order.
    ///
    /// At most [`MAX_CONCURRENT_ITEMS`] item requests run at once. Items that
    /// fail to load or were deleted are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns the error from [`HackerNewsClient::top_story_ids`]; item
    /// failures never fail the call.
    pub async fn top_stories_with_details(&self, limit: u32) -> Result<Vec<HnItem>, TrendError> {
        let ids = self.top_story_ids(limit).await?;
        let fetched: Vec<(u64, Result<Option<HnItem>, TrendError>)> =
            stream::iter(ids.iter().copied())
                .map(|id| async move { (id, self.item(id).await) })
                .buffered(MAX_CONCURRENT_ITEMS)
                .collect()
                .await;

        let mut stories = Vec::with_capacity(ids.len());
        for (id, result) in fetched {
            match result {
                Ok(Some(item)) => stories.push(item),
                Ok(None) => {
                    tracing::debug!(id, "hackernews item is null, skipping");
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, "hackernews item fetch failed, skipping");
                }
            }
        }

        tracing::debug!(
            requested = ids.len(),
            count = stories.len(),
            "fetched Hacker News stories"
        );
        Ok(stories)
    }
}
