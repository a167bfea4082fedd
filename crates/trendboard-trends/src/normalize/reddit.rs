use std::collections::BTreeMap;

use crate::frequency::FrequencyTable;
use crate::ranking::{forum_engagement, rank_by_engagement};
use crate::raw::PostData;
use crate::text::{extract_hashtags, extract_keywords, MIN_KEYWORD_LEN};
use crate::types::{NormalizedItem, Platform, RedditTrends};

use super::{unix_to_rfc3339, TOP_HASHTAGS, TOP_KEYWORDS};

/// Rank hot posts from several subreddits together.
///
/// `feeds` pairs each queried subreddit with its posts, in query order; a
/// subreddit that returned nothing still appears in `subreddits_analyzed`.
#[must_use]
pub fn normalize_posts(feeds: &[(String, Vec<PostData>)], limit: usize) -> RedditTrends {
    let mut keywords = FrequencyTable::new();
    let mut hashtags = FrequencyTable::new();
    let mut items = Vec::new();

    for (subreddit, posts) in feeds {
        for post in posts {
            let title = post.title.clone().unwrap_or_default();
            let score = post.score.unwrap_or(0);
            let comments = post.num_comments.unwrap_or(0);

            hashtags.extend(extract_hashtags(&title));
            keywords.extend(extract_keywords(&title, MIN_KEYWORD_LEN));

            items.push(NormalizedItem {
                platform: Platform::Reddit,
                author: post.author.clone().unwrap_or_default(),
                primary_count: score,
                secondary_counts: BTreeMap::from([("comments".to_string(), comments)]),
                engagement: forum_engagement(score, comments),
                url: post_url(post),
                community: Some(subreddit.clone()),
                published_at: unix_to_rfc3339(post.created_utc),
                title,
            });
        }
    }

    RedditTrends {
        total_posts: items.len(),
        posts: rank_by_engagement(items, limit),
        subreddits_analyzed: feeds.iter().map(|(name, _)| name.clone()).collect(),
        top_keywords: keywords.top_keywords(TOP_KEYWORDS),
        top_hashtags: hashtags.top_hashtags(TOP_HASHTAGS),
    }
}

/// Link target if the post has one, else its permalink.
fn post_url(post: &PostData) -> String {
    match (post.url.as_deref(), post.permalink.as_deref()) {
        (Some(url), _) if !url.is_empty() => url.to_string(),
        (_, Some(permalink)) if !permalink.is_empty() => format!("https://reddit.com{permalink}"),
        _ => String::new(),
    }
}
