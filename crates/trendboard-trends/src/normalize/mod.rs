//! Raw platform responses → ranked items and local keyword/hashtag counts.
//!
//! Normalizers never fail. Absent fields fall back to `0` or an empty
//! string, and an absent nested list yields no items. Deciding that a
//! response is unusable as a whole is the aggregator's job.

mod google_trends;
mod hackernews;
mod reddit;
mod youtube;

pub use google_trends::normalize_interest;
pub use hackernews::normalize_stories;
pub use reddit::normalize_posts;
pub use youtube::normalize_videos;

use chrono::DateTime;

/// Items kept per platform after ranking.
pub const TOP_ITEMS: usize = 10;
/// Keywords kept per platform.
pub const TOP_KEYWORDS: usize = 10;
/// Hashtags kept per platform.
pub const TOP_HASHTAGS: usize = 10;

/// Unix seconds → RFC 3339, `None` when absent or out of range.
fn unix_to_rfc3339(secs: Option<i64>) -> Option<String> {
    secs.and_then(|s| DateTime::from_timestamp(s, 0))
        .map(|dt| dt.to_rfc3339())
}
