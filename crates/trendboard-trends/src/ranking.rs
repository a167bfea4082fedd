//! Per-platform engagement scores and top-N ranking.
//!
//! Scores are only comparable within one platform. Reddit and Hacker News
//! weight comments differently on purpose.

use crate::types::NormalizedItem;

/// `views + 10 * likes + 5 * comments`.
#[must_use]
pub fn video_engagement(views: i64, likes: i64, comments: i64) -> i64 {
    views
        .saturating_add(likes.saturating_mul(10))
        .saturating_add(comments.saturating_mul(5))
}

/// `score + comments`.
#[must_use]
pub fn forum_engagement(score: i64, comments: i64) -> i64 {
    score.saturating_add(comments)
}

/// `score + 2 * comments`; discussion counts double on Hacker News.
#[must_use]
pub fn news_engagement(score: i64, comments: i64) -> i64 {
    score.saturating_add(comments.saturating_mul(2))
}

/// Sort `items` by engagement descending and keep the first `limit`.
///
/// The sort is stable: items with equal engagement keep their input order.
#[must_use]
pub fn rank_by_engagement(mut items: Vec<NormalizedItem>, limit: usize) -> Vec<NormalizedItem> {
    items.sort_by(|a, b| b.engagement.cmp(&a.engagement));
    items.truncate(limit);
    items
}
