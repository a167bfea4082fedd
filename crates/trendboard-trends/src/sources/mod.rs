//! Platform API clients and the [`TrendFeeds`] seam the aggregator reads from.

mod hackernews;
mod reddit;
mod serpapi;
mod youtube;

pub use hackernews::HackerNewsClient;
pub use reddit::RedditClient;
pub use serpapi::SerpApiClient;
pub use youtube::YouTubeClient;

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use trendboard_core::AppConfig;

use crate::error::TrendError;
use crate::raw::{HnItem, InterestResponse, Listing, VideoListResponse};
use crate::types::Platform;

/// Raw responses for each platform, one call per request.
///
/// Implementations do no normalization. An `Err` from any method is
/// recorded by the aggregator rather than propagated.
pub trait TrendFeeds {
    fn trending_videos(
        &self,
        region: &str,
        max_results: u32,
    ) -> impl Future<Output = Result<VideoListResponse, TrendError>> + Send;

    fn hot_posts(
        &self,
        subreddit: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Listing, TrendError>> + Send;

    fn top_stories(&self, limit: u32)
        -> impl Future<Output = Result<Vec<HnItem>, TrendError>> + Send;

    fn interest_over_time(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<InterestResponse, TrendError>> + Send;
}

/// Live HTTP implementation of [`TrendFeeds`].
///
/// YouTube and SerpApi need API keys; without one the matching method
/// returns [`TrendError::NotConfigured`].
pub struct HttpFeeds {
    youtube: Option<YouTubeClient>,
    reddit: RedditClient,
    hackernews: HackerNewsClient,
    serpapi: Option<SerpApiClient>,
}

impl HttpFeeds {
    #[must_use]
    pub fn new(
        youtube: Option<YouTubeClient>,
        reddit: RedditClient,
        hackernews: HackerNewsClient,
        serpapi: Option<SerpApiClient>,
    ) -> Self {
        Self {
            youtube,
            reddit,
            hackernews,
            serpapi,
        }
    }

    /// Build every client against the production endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Http`] if an HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, TrendError> {
        let timeout = config.request_timeout_secs;
        let agent = config.user_agent.as_str();

        let youtube = config
            .youtube_api_key
            .as_deref()
            .map(|key| YouTubeClient::new(key, timeout, agent))
            .transpose()?;
        let serpapi = config
            .serpapi_key
            .as_deref()
            .map(|key| SerpApiClient::new(key, timeout, agent))
            .transpose()?;

        if youtube.is_none() {
            tracing::warn!("YOUTUBE_API_KEY not set; youtube will be reported as unavailable");
        }
        if serpapi.is_none() {
            tracing::warn!("SERPAPI_KEY not set; google_trends will be reported as unavailable");
        }

        Ok(Self::new(
            youtube,
            RedditClient::new(timeout, agent)?,
            HackerNewsClient::new(timeout, agent)?,
            serpapi,
        ))
    }
}

impl TrendFeeds for HttpFeeds {
    async fn trending_videos(
        &self,
        region: &str,
        max_results: u32,
    ) -> Result<VideoListResponse, TrendError> {
        let client = self
            .youtube
            .as_ref()
            .ok_or(TrendError::NotConfigured(Platform::YouTube))?;
        client.trending_videos(region, max_results).await
    }

    async fn hot_posts(&self, subreddit: &str, limit: u32) -> Result<Listing, TrendError> {
        self.reddit.hot_posts(subreddit, limit).await
    }

    async fn top_stories(&self, limit: u32) -> Result<Vec<HnItem>, TrendError> {
        self.hackernews.top_stories_with_details(limit).await
    }

    async fn interest_over_time(&self, query: &str) -> Result<InterestResponse, TrendError> {
        let client = self
            .serpapi
            .as_ref()
            .ok_or(TrendError::NotConfigured(Platform::GoogleTrends))?;
        client.interest_over_time(query).await
    }
}

/// Shared `reqwest` client setup for every platform.
fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, TrendError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?)
}

/// Strip trailing slashes so endpoint paths can be appended with `/`.
fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Send a prepared GET, require a 2xx status, and decode the JSON body.
async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    context: &str,
) -> Result<T, TrendError> {
    let response = request.send().await?.error_for_status()?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| TrendError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}
