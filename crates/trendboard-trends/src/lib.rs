//! Cross-platform trend aggregation for trendboard.
//!
//! Polls YouTube, Reddit, Hacker News and Google Trends (via SerpApi),
//! normalizes each response into ranked items plus local keyword and
//! hashtag counts, classifies search-interest direction, and merges the
//! per-platform counts into one global ranking. Each run yields a single
//! [`AggregatedResult`] that [`SnapshotStore`] persists as JSON.

pub mod aggregator;
pub mod error;
pub mod frequency;
pub mod normalize;
pub mod ranking;
pub mod raw;
pub mod report;
pub mod sources;
pub mod store;
pub mod text;
pub mod trend;
pub mod types;

pub use aggregator::{aggregate_all, run_and_store};
pub use error::TrendError;
pub use report::{render_markdown, summarize, TopItemsSummary};
pub use sources::{HttpFeeds, TrendFeeds};
pub use store::SnapshotStore;
pub use trend::classify;
pub use types::{
    AggregatedResult, HackerNewsTrends, HashtagCount, KeywordCount, NormalizedItem, Platform,
    PlatformSlot, RedditTrends, SearchInterestTrends, TrendDirection, TrendPoint, VideoTrends,
};
