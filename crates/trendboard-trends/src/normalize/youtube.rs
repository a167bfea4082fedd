use std::collections::BTreeMap;

use crate::frequency::FrequencyTable;
use crate::ranking::{rank_by_engagement, video_engagement};
use crate::raw::Video;
use crate::text::{extract_hashtags, extract_keywords, MIN_KEYWORD_LEN};
use crate::types::{NormalizedItem, Platform, VideoTrends};

use super::{TOP_HASHTAGS, TOP_KEYWORDS};

/// Rank trending videos and count keywords (titles) and hashtags
/// (title + description) across every fetched video.
#[must_use]
pub fn normalize_videos(videos: &[Video], limit: usize) -> VideoTrends {
    let mut keywords = FrequencyTable::new();
    let mut hashtags = FrequencyTable::new();
    let mut items = Vec::with_capacity(videos.len());
    let mut total_views: i64 = 0;

    for video in videos {
        let snippet = video.snippet.as_ref();
        let stats = video.statistics.as_ref();

        let title = snippet.and_then(|s| s.title.clone()).unwrap_or_default();
        let description = snippet
            .and_then(|s| s.description.as_deref())
            .unwrap_or_default();
        let views = stats.and_then(|s| s.view_count).unwrap_or(0);
        let likes = stats.and_then(|s| s.like_count).unwrap_or(0);
        let comments = stats.and_then(|s| s.comment_count).unwrap_or(0);
        let video_id = video.id.as_deref().unwrap_or_default();

        hashtags.extend(extract_hashtags(&format!("{title} {description}")));
        keywords.extend(extract_keywords(&title, MIN_KEYWORD_LEN));
        total_views = total_views.saturating_add(views);

        items.push(NormalizedItem {
            platform: Platform::YouTube,
            author: snippet
                .and_then(|s| s.channel_title.clone())
                .unwrap_or_default(),
            primary_count: views,
            secondary_counts: BTreeMap::from([
                ("likes".to_string(), likes),
                ("comments".to_string(), comments),
            ]),
            engagement: video_engagement(views, likes, comments),
            url: format!("https://www.youtube.com/watch?v={video_id}"),
            community: None,
            published_at: snippet.and_then(|s| s.published_at.clone()),
            title,
        });
    }

    VideoTrends {
        total_videos: items.len(),
        total_views,
        videos: rank_by_engagement(items, limit),
        top_keywords: keywords.top_keywords(TOP_KEYWORDS),
        top_hashtags: hashtags.top_hashtags(TOP_HASHTAGS),
    }
}
