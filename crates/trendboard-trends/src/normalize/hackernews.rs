use std::collections::BTreeMap;

use crate::frequency::FrequencyTable;
use crate::ranking::{news_engagement, rank_by_engagement};
use crate::raw::HnItem;
use crate::text::{extract_keywords, MIN_KEYWORD_LEN};
use crate::types::{HackerNewsTrends, NormalizedItem, Platform};

use super::{unix_to_rfc3339, TOP_KEYWORDS};

/// Rank top stories with comments weighted double. Hacker News titles carry
/// no hashtags, so only keywords are counted.
#[must_use]
pub fn normalize_stories(stories: &[HnItem], limit: usize) -> HackerNewsTrends {
    let mut keywords = FrequencyTable::new();
    let mut items = Vec::with_capacity(stories.len());

    for story in stories {
        let title = story.title.clone().unwrap_or_default();
        let score = story.score.unwrap_or(0);
        let comments = story.descendants.unwrap_or(0);

        keywords.extend(extract_keywords(&title, MIN_KEYWORD_LEN));

        items.push(NormalizedItem {
            platform: Platform::HackerNews,
            author: story.by.clone().unwrap_or_default(),
            primary_count: score,
            secondary_counts: BTreeMap::from([("comments".to_string(), comments)]),
            engagement: news_engagement(score, comments),
            url: story_url(story),
            community: None,
            published_at: unix_to_rfc3339(story.time),
            title,
        });
    }

    HackerNewsTrends {
        total_stories: items.len(),
        stories: rank_by_engagement(items, limit),
        top_keywords: keywords.top_keywords(TOP_KEYWORDS),
    }
}

/// Ask/Show HN posts have no external URL; link the discussion instead.
fn story_url(story: &HnItem) -> String {
    match (story.url.as_deref(), story.id) {
        (Some(url), _) if !url.is_empty() => url.to_string(),
        (_, Some(id)) => format!("https://news.ycombinator.com/item?id={id}"),
        _ => String::new(),
    }
}
