//! Normalized items and the aggregated result document.
//!
//! Every value here is built fresh inside one aggregation run. The JSON
//! shape produced by `serde` is the persisted document format consumed by
//! [`crate::report`] and by anything else reading `latest.json`.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TrendError;

/// A platform the aggregator polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "youtube")]
    YouTube,
    #[serde(rename = "reddit")]
    Reddit,
    #[serde(rename = "hackernews")]
    HackerNews,
    #[serde(rename = "google_trends")]
    GoogleTrends,
}

impl Platform {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Reddit => "reddit",
            Platform::HackerNews => "hackernews",
            Platform::GoogleTrends => "google_trends",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked item (video, post or story) in a common shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedItem {
    pub platform: Platform,
    pub title: String,
    /// Channel, post author or story submitter.
    pub author: String,
    /// Views for videos, score for posts and stories.
    pub primary_count: i64,
    /// `likes`, `comments` and so on.
    pub secondary_counts: BTreeMap<String, i64>,
    /// Platform-specific weighted score; only comparable within a platform.
    pub engagement: i64,
    pub url: String,
    /// Originating subreddit, for Reddit posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl NormalizedItem {
    /// Secondary counter by name, `0` when absent.
    #[must_use]
    pub fn secondary(&self, name: &str) -> i64 {
        self.secondary_counts.get(name).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagCount {
    pub hashtag: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Falling => "falling",
            TrendDirection::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Latest search interest for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub query: String,
    /// Interest on the 0–100 scale of the latest timeline point.
    pub interest: i64,
    pub date: String,
    #[serde(rename = "trend_direction")]
    pub direction: TrendDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoTrends {
    pub videos: Vec<NormalizedItem>,
    pub total_videos: usize,
    pub total_views: i64,
    pub top_keywords: Vec<KeywordCount>,
    pub top_hashtags: Vec<HashtagCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedditTrends {
    pub posts: Vec<NormalizedItem>,
    pub total_posts: usize,
    pub subreddits_analyzed: Vec<String>,
    pub top_keywords: Vec<KeywordCount>,
    pub top_hashtags: Vec<HashtagCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HackerNewsTrends {
    pub stories: Vec<NormalizedItem>,
    pub total_stories: usize,
    pub top_keywords: Vec<KeywordCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInterestTrends {
    pub trends: Vec<TrendPoint>,
    pub queries_analyzed: Vec<String>,
}

/// A platform's entry in the result document: its data or the error that
/// prevented collecting it. Serializes as the bare result or `{"error": ...}`.
///
/// Documents read back from disk may carry an entry that is neither, e.g.
/// one written by another tool without the platform's item list. Those
/// land in [`PlatformSlot::Unrecognized`] and are treated as unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlatformSlot<T> {
    Ready(T),
    Failed { error: String },
    Unrecognized(serde_json::Value),
}

impl<T> Default for PlatformSlot<T> {
    fn default() -> Self {
        PlatformSlot::Unrecognized(serde_json::Value::Null)
    }
}

impl<T> PlatformSlot<T> {
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            PlatformSlot::Ready(value) => Some(value),
            PlatformSlot::Failed { .. } | PlatformSlot::Unrecognized(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            PlatformSlot::Failed { error } => Some(error),
            PlatformSlot::Ready(_) | PlatformSlot::Unrecognized(_) => None,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, PlatformSlot::Ready(_))
    }
}

impl<T> From<Result<T, TrendError>> for PlatformSlot<T> {
    fn from(result: Result<T, TrendError>) -> Self {
        match result {
            Ok(value) => PlatformSlot::Ready(value),
            Err(e) => PlatformSlot::Failed {
                error: e.to_string(),
            },
        }
    }
}

/// The document produced by one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedResult {
    /// Captured once when the run starts.
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub youtube: PlatformSlot<VideoTrends>,
    #[serde(default)]
    pub reddit: PlatformSlot<RedditTrends>,
    #[serde(default)]
    pub hackernews: PlatformSlot<HackerNewsTrends>,
    #[serde(default)]
    pub google_trends: PlatformSlot<SearchInterestTrends>,
    #[serde(default)]
    pub global_keywords: Vec<KeywordCount>,
    #[serde(default)]
    pub global_hashtags: Vec<HashtagCount>,
}

impl AggregatedResult {
    /// Platforms without usable data, in document order.
    #[must_use]
    pub fn failed_platforms(&self) -> Vec<Platform> {
        let slots = [
            (Platform::YouTube, self.youtube.is_ready()),
            (Platform::Reddit, self.reddit.is_ready()),
            (Platform::HackerNews, self.hackernews.is_ready()),
            (Platform::GoogleTrends, self.google_trends.is_ready()),
        ];
        slots
            .into_iter()
            .filter(|(_, ready)| !ready)
            .map(|(platform, _)| platform)
            .collect()
    }
}
