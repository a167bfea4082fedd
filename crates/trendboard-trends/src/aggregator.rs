//! Aggregation run orchestration.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use trendboard_core::PlatformQueries;

use crate::error::TrendError;
use crate::frequency::{merge_hashtags, merge_keywords};
use crate::normalize::{
    normalize_interest, normalize_posts, normalize_stories, normalize_videos, TOP_ITEMS,
};
use crate::sources::TrendFeeds;
use crate::store::SnapshotStore;
use crate::types::{
    AggregatedResult, HackerNewsTrends, Platform, PlatformSlot, RedditTrends,
    SearchInterestTrends, VideoTrends,
};

/// Keywords kept in the cross-platform ranking.
pub const GLOBAL_KEYWORDS: usize = 30;
/// Hashtags kept in the cross-platform ranking.
pub const GLOBAL_HASHTAGS: usize = 15;

/// Collect every platform once and merge the results.
///
/// The four platforms are fetched concurrently and independently: a
/// failure in one is logged and stored as that platform's `{error}` slot,
/// and never affects the others. This function always returns a document.
pub async fn aggregate_all<F: TrendFeeds>(
    feeds: &F,
    queries: &PlatformQueries,
) -> AggregatedResult {
    let timestamp = Utc::now();
    tracing::info!("collecting trends from all platforms");

    let (youtube, reddit, hackernews, google_trends) = tokio::join!(
        collect_youtube(feeds, queries),
        collect_reddit(feeds, queries),
        collect_hackernews(feeds, queries),
        collect_google_trends(feeds, queries),
    );

    let result = assemble(
        timestamp,
        record(Platform::YouTube, youtube),
        record(Platform::Reddit, reddit),
        record(Platform::HackerNews, hackernews),
        record(Platform::GoogleTrends, google_trends),
    );

    let failed = result.failed_platforms();
    tracing::info!(
        failed_platforms = failed.len(),
        global_keywords = result.global_keywords.len(),
        global_hashtags = result.global_hashtags.len(),
        "trend aggregation complete"
    );
    result
}

/// Run one aggregation and persist it.
///
/// # Errors
///
/// Returns [`TrendError::Io`] or [`TrendError::Json`] if the snapshot
/// cannot be written. Platform failures never surface here.
pub async fn run_and_store<F: TrendFeeds>(
    feeds: &F,
    queries: &PlatformQueries,
    store: &SnapshotStore,
) -> Result<(AggregatedResult, PathBuf), TrendError> {
    let result = aggregate_all(feeds, queries).await;
    let path = store.save(&result).await?;
    Ok((result, path))
}

/// Build the document from finished platform slots.
///
/// Global keywords merge the youtube, reddit and hackernews tables in that
/// order. Global hashtags merge youtube and reddit. Failed slots contribute
/// nothing.
#[must_use]
pub fn assemble(
    timestamp: DateTime<Utc>,
    youtube: PlatformSlot<VideoTrends>,
    reddit: PlatformSlot<RedditTrends>,
    hackernews: PlatformSlot<HackerNewsTrends>,
    google_trends: PlatformSlot<SearchInterestTrends>,
) -> AggregatedResult {
    let keyword_tables = [
        youtube.ready().map(|t| t.top_keywords.as_slice()),
        reddit.ready().map(|t| t.top_keywords.as_slice()),
        hackernews.ready().map(|t| t.top_keywords.as_slice()),
    ];
    let hashtag_tables = [
        youtube.ready().map(|t| t.top_hashtags.as_slice()),
        reddit.ready().map(|t| t.top_hashtags.as_slice()),
    ];

    let global_keywords =
        merge_keywords(keyword_tables.into_iter().flatten()).top_keywords(GLOBAL_KEYWORDS);
    let global_hashtags =
        merge_hashtags(hashtag_tables.into_iter().flatten()).top_hashtags(GLOBAL_HASHTAGS);

    AggregatedResult {
        timestamp,
        youtube,
        reddit,
        hackernews,
        google_trends,
        global_keywords,
        global_hashtags,
    }
}

fn record<T>(platform: Platform, result: Result<T, TrendError>) -> PlatformSlot<T> {
    match &result {
        Ok(_) => tracing::debug!(platform = %platform, "platform collected"),
        Err(e) => tracing::warn!(platform = %platform, error = %e, "platform collection failed"),
    }
    result.into()
}

async fn collect_youtube<F: TrendFeeds>(
    feeds: &F,
    queries: &PlatformQueries,
) -> Result<VideoTrends, TrendError> {
    let response = feeds
        .trending_videos(&queries.youtube_region, queries.youtube_limit)
        .await?;
    let videos = response.items.ok_or_else(|| TrendError::MissingData {
        platform: Platform::YouTube,
        reason: "response has no `items`".to_string(),
    })?;
    Ok(normalize_videos(&videos, TOP_ITEMS))
}

/// Subreddits are fetched one after another. A failed subreddit
/// contributes no posts; the platform fails only when every fetch failed.
async fn collect_reddit<F: TrendFeeds>(
    feeds: &F,
    queries: &PlatformQueries,
) -> Result<RedditTrends, TrendError> {
    let mut per_subreddit = Vec::with_capacity(queries.subreddits.len());
    let mut failures = 0;
    let mut first_error = None;

    for subreddit in &queries.subreddits {
        let posts = match feeds.hot_posts(subreddit, queries.reddit_limit).await {
            Ok(listing) => listing.into_posts(),
            Err(e) => {
                tracing::warn!(
                    platform = "reddit",
                    subreddit = %subreddit,
                    error = %e,
                    "subreddit fetch failed"
                );
                failures += 1;
                first_error.get_or_insert(e);
                Vec::new()
            }
        };
        tracing::debug!(subreddit = %subreddit, count = posts.len(), "collected posts");
        per_subreddit.push((subreddit.clone(), posts));
    }

    if let Some(e) = first_error {
        if failures == queries.subreddits.len() {
            return Err(e);
        }
    }
    Ok(normalize_posts(&per_subreddit, TOP_ITEMS))
}

async fn collect_hackernews<F: TrendFeeds>(
    feeds: &F,
    queries: &PlatformQueries,
) -> Result<HackerNewsTrends, TrendError> {
    let stories = feeds.top_stories(queries.hn_limit).await?;
    Ok(normalize_stories(&stories, TOP_ITEMS))
}

/// Same failure policy as Reddit, per query.
async fn collect_google_trends<F: TrendFeeds>(
    feeds: &F,
    queries: &PlatformQueries,
) -> Result<SearchInterestTrends, TrendError> {
    let mut series = Vec::with_capacity(queries.google_queries.len());
    let mut failures = Vec::new();
    let mut first_error = None;

    for query in &queries.google_queries {
        match feeds.interest_over_time(query).await {
            Ok(response) => series.push((query.clone(), response)),
            Err(e) => {
                tracing::warn!(
                    platform = "google_trends",
                    query = %query,
                    error = %e,
                    "interest query failed"
                );
                failures.push(query.clone());
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        if series.is_empty() {
            return Err(e);
        }
    }

    let mut trends = normalize_interest(&series);
    // Failed queries were still requested.
    trends.queries_analyzed = queries.google_queries.clone();
    if !failures.is_empty() {
        tracing::debug!(failed = ?failures, "some google trends queries were skipped");
    }
    Ok(trends)
}
