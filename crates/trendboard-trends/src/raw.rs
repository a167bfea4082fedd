//! Raw platform response schemas.
//!
//! Each struct lists exactly the fields the normalizers read. Everything is
//! optional: an absent, `null` or wrongly typed field falls back to a
//! documented default at the point of use rather than failing
//! deserialization of the whole response. Numeric counters go through
//! [`lenient_count`] because YouTube sends them as decimal strings and
//! other platforms as numbers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Accepts a JSON number, a decimal string, or `null`.
///
/// Anything unparseable becomes `None`, which callers read as `0`.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

#[allow(clippy::cast_possible_truncation)]
fn count_from_value(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Non-negative [`lenient_count`].
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(count_from_value)
        .and_then(|n| u64::try_from(n).ok()))
}

/// A JSON string, or `None` for `null` and any other type.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// A nested object, or `None` when it is `null` or does not fit `T`.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// A JSON array; `null` or a non-array is empty. Elements that do not fit
/// `T` are dropped.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient_array(deserializer)?.unwrap_or_default())
}

/// Like [`lenient_list`], but keeps `None` apart from an empty array.
fn lenient_array<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(items)) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// YouTube Data API: videos?chart=mostPopular
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct VideoListResponse {
    /// `None` when the key is missing or not an array, which fails the
    /// platform.
    #[serde(default, deserialize_with = "lenient_array")]
    pub items: Option<Vec<Video>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Video {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub snippet: Option<VideoSnippet>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub channel_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, deserialize_with = "lenient_count")]
    pub view_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub like_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub comment_count: Option<i64>,
}

// ---------------------------------------------------------------------------
// Reddit: /r/<subreddit>/hot.json
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "lenient_object")]
    pub data: Option<ListingData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingData {
    #[serde(default, deserialize_with = "lenient_list")]
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingChild {
    #[serde(default, deserialize_with = "lenient_object")]
    pub data: Option<PostData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostData {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub score: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub num_comments: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub permalink: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub created_utc: Option<i64>,
}

impl Listing {
    /// Flatten the listing into its posts. Children without a `data`
    /// object still count as (empty) posts.
    #[must_use]
    pub fn into_posts(self) -> Vec<PostData> {
        self.data
            .map(|d| d.children)
            .unwrap_or_default()
            .into_iter()
            .map(|child| child.data.unwrap_or_default())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Hacker News Firebase API: item/<id>.json
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct HnItem {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub by: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub score: Option<i64>,
    /// Total comment count.
    #[serde(default, deserialize_with = "lenient_count")]
    pub descendants: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub time: Option<i64>,
}

// ---------------------------------------------------------------------------
// SerpApi google_trends TIMESERIES
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct InterestResponse {
    /// SerpApi reports request-level failures in-band.
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub interest_over_time: Option<InterestOverTime>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InterestOverTime {
    #[serde(default, deserialize_with = "lenient_list")]
    pub timeline_data: Vec<TimelinePoint>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TimelinePoint {
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub values: Vec<TimelineValue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TimelineValue {
    #[serde(default, deserialize_with = "lenient_count")]
    pub extracted_value: Option<i64>,
}

impl TimelinePoint {
    /// Interest of the first series in this point, `0` when absent.
    #[must_use]
    pub fn interest(&self) -> i64 {
        self.values
            .first()
            .and_then(|v| v.extracted_value)
            .unwrap_or(0)
    }
}
