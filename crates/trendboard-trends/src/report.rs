//! Read-side views over a stored [`AggregatedResult`].
//!
//! Both the summary and the markdown report treat any platform slot without
//! data as empty: a failed slot is shown as unavailable, an unrecognized one
//! is skipped. Neither ever fails on a parsed document.

use std::fmt::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{
    AggregatedResult, HashtagCount, KeywordCount, NormalizedItem, PlatformSlot, TrendPoint,
    VideoTrends,
};

/// The first few entries of every ranking in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopItemsSummary {
    pub timestamp: DateTime<Utc>,
    pub youtube_videos: Vec<NormalizedItem>,
    pub reddit_posts: Vec<NormalizedItem>,
    pub hackernews_stories: Vec<NormalizedItem>,
    pub search_interest: Vec<TrendPoint>,
    pub global_keywords: Vec<KeywordCount>,
    pub global_hashtags: Vec<HashtagCount>,
}

#[must_use]
pub fn summarize(result: &AggregatedResult, top_n: usize) -> TopItemsSummary {
    fn head<T: Clone>(items: Option<&[T]>, n: usize) -> Vec<T> {
        items.unwrap_or_default().iter().take(n).cloned().collect()
    }

    TopItemsSummary {
        timestamp: result.timestamp,
        youtube_videos: head(result.youtube.ready().map(|t| t.videos.as_slice()), top_n),
        reddit_posts: head(result.reddit.ready().map(|t| t.posts.as_slice()), top_n),
        hackernews_stories: head(
            result.hackernews.ready().map(|t| t.stories.as_slice()),
            top_n,
        ),
        search_interest: head(
            result.google_trends.ready().map(|t| t.trends.as_slice()),
            top_n,
        ),
        global_keywords: head(Some(result.global_keywords.as_slice()), top_n),
        global_hashtags: head(Some(result.global_hashtags.as_slice()), top_n),
    }
}

/// Integer mean of views over every fetched video, `0` when there were none.
#[must_use]
pub fn average_views(videos: &VideoTrends) -> i64 {
    match i64::try_from(videos.total_videos) {
        Ok(count) if count > 0 => videos.total_views / count,
        _ => 0,
    }
}

/// Sum of primary counts (score) over `items`.
#[must_use]
pub fn total_primary(items: &[NormalizedItem]) -> i64 {
    items
        .iter()
        .fold(0i64, |acc, item| acc.saturating_add(item.primary_count))
}

/// Sum of the `comments` counter over `items`.
#[must_use]
pub fn total_comments(items: &[NormalizedItem]) -> i64 {
    items
        .iter()
        .fold(0i64, |acc, item| acc.saturating_add(item.secondary("comments")))
}

/// Render a document as a markdown report.
///
/// # Panics
///
/// Never in practice: `fmt::Write` for `String` does not fail.
#[must_use]
pub fn render_markdown(result: &AggregatedResult) -> String {
    let mut out = String::new();
    write_report(&mut out, result).expect("writing to a String cannot fail");
    out
}

fn write_report(out: &mut String, result: &AggregatedResult) -> fmt::Result {
    writeln!(out, "# Trend Report")?;
    writeln!(out)?;
    writeln!(
        out,
        "**Generated**: {}",
        result.timestamp.format("%Y-%m-%d %H:%M UTC")
    )?;
    let failed = result.failed_platforms();
    if !failed.is_empty() {
        let names: Vec<&str> = failed.iter().map(|p| p.as_str()).collect();
        writeln!(out, "**Unavailable**: {}", names.join(", "))?;
    }
    writeln!(out)?;
    writeln!(out, "---")?;

    writeln!(out)?;
    writeln!(out, "## Global Keywords")?;
    writeln!(out)?;
    if result.global_keywords.is_empty() {
        writeln!(out, "_none_")?;
    } else {
        writeln!(out, "| Rank | Keyword | Count |")?;
        writeln!(out, "|------|---------|-------|")?;
        for (rank, kw) in result.global_keywords.iter().enumerate() {
            writeln!(out, "| {} | {} | {} |", rank + 1, cell(&kw.keyword), kw.count)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "## Global Hashtags")?;
    writeln!(out)?;
    if result.global_hashtags.is_empty() {
        writeln!(out, "_none_")?;
    } else {
        writeln!(out, "| Rank | Hashtag | Count |")?;
        writeln!(out, "|------|---------|-------|")?;
        for (rank, tag) in result.global_hashtags.iter().enumerate() {
            writeln!(out, "| {} | {} | {} |", rank + 1, cell(&tag.hashtag), tag.count)?;
        }
    }

    if section(out, "YouTube", &result.youtube)? {
        if let Some(yt) = result.youtube.ready() {
            writeln!(out, "**Videos analyzed**: {}", yt.total_videos)?;
            writeln!(out, "**Total views**: {}", yt.total_views)?;
            writeln!(out, "**Avg views per video**: {}", average_views(yt))?;
            writeln!(out)?;
            writeln!(out, "| Title | Channel | Views | Likes | Comments |")?;
            writeln!(out, "|-------|---------|-------|-------|----------|")?;
            for video in &yt.videos {
                writeln!(
                    out,
                    "| {} | {} | {} | {} | {} |",
                    link(video),
                    cell(&video.author),
                    video.primary_count,
                    video.secondary("likes"),
                    video.secondary("comments"),
                )?;
            }
        }
    }

    if section(out, "Reddit", &result.reddit)? {
        if let Some(reddit) = result.reddit.ready() {
            writeln!(out, "**Posts analyzed**: {}", reddit.total_posts)?;
            writeln!(
                out,
                "**Subreddits**: {}",
                reddit.subreddits_analyzed.join(", ")
            )?;
            writeln!(out, "**Total score (shown)**: {}", total_primary(&reddit.posts))?;
            writeln!(out)?;
            writeln!(out, "| Title | Subreddit | Score | Comments |")?;
            writeln!(out, "|-------|-----------|-------|----------|")?;
            for post in &reddit.posts {
                writeln!(
                    out,
                    "| {} | {} | {} | {} |",
                    link(post),
                    cell(post.community.as_deref().unwrap_or_default()),
                    post.primary_count,
                    post.secondary("comments"),
                )?;
            }
        }
    }

    if section(out, "Hacker News", &result.hackernews)? {
        if let Some(hn) = result.hackernews.ready() {
            writeln!(out, "**Stories analyzed**: {}", hn.total_stories)?;
            writeln!(out, "**Total points (shown)**: {}", total_primary(&hn.stories))?;
            writeln!(
                out,
                "**Total comments (shown)**: {}",
                total_comments(&hn.stories)
            )?;
            writeln!(out)?;
            writeln!(out, "| Title | By | Points | Comments |")?;
            writeln!(out, "|-------|----|--------|----------|")?;
            for story in &hn.stories {
                writeln!(
                    out,
                    "| {} | {} | {} | {} |",
                    link(story),
                    cell(&story.author),
                    story.primary_count,
                    story.secondary("comments"),
                )?;
            }
        }
    }

    if section(out, "Google Trends", &result.google_trends)? {
        if let Some(gt) = result.google_trends.ready() {
            writeln!(out, "**Queries**: {}", gt.queries_analyzed.join(", "))?;
            writeln!(out)?;
            writeln!(out, "| Query | Interest | Date | Trend |")?;
            writeln!(out, "|-------|----------|------|-------|")?;
            for point in &gt.trends {
                writeln!(
                    out,
                    "| {} | {} | {} | {} |",
                    cell(&point.query),
                    point.interest,
                    cell(&point.date),
                    point.direction,
                )?;
            }
        }
    }

    Ok(())
}

/// Write a platform heading. Returns whether the slot has data to render.
fn section<T>(
    out: &mut String,
    title: &str,
    slot: &PlatformSlot<T>,
) -> Result<bool, fmt::Error> {
    match slot {
        PlatformSlot::Ready(_) => {
            writeln!(out)?;
            writeln!(out, "## {title}")?;
            writeln!(out)?;
            Ok(true)
        }
        PlatformSlot::Failed { error } => {
            writeln!(out)?;
            writeln!(out, "## {title}")?;
            writeln!(out)?;
            writeln!(out, "_unavailable: {}_", cell(error))?;
            Ok(false)
        }
        PlatformSlot::Unrecognized(_) => Ok(false),
    }
}

fn link(item: &NormalizedItem) -> String {
    if item.url.is_empty() {
        cell(&item.title)
    } else {
        format!("[{}]({})", cell(&item.title), cell(&item.url))
    }
}

/// Keep table cells on one line and out of the column separators.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}
