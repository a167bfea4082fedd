//! On-disk snapshots of aggregation results.
//!
//! Each run is written twice: a timestamped `trends_YYYYMMDD_HHMMSS.json`
//! kept as history, and `latest.json` overwritten every run.

use std::path::{Path, PathBuf};

use trendboard_core::AppConfig;

use crate::error::TrendError;
use crate::types::AggregatedResult;

const LATEST_FILE: &str = "latest.json";
const SNAPSHOT_PREFIX: &str = "trends_";

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at `<data_dir>/processed`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.processed_dir())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn latest_path(&self) -> PathBuf {
        self.dir.join(LATEST_FILE)
    }

    /// File name for a snapshot taken at the result's timestamp.
    #[must_use]
    pub fn snapshot_name(result: &AggregatedResult) -> String {
        format!(
            "{SNAPSHOT_PREFIX}{}.json",
            result.timestamp.format("%Y%m%d_%H%M%S")
        )
    }

    /// Write the timestamped snapshot and refresh `latest.json`.
    ///
    /// Returns the path of the timestamped file.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Io`] if the directory or either file cannot be
    /// written, or [`TrendError::Json`] if serialization fails.
    pub async fn save(&self, result: &AggregatedResult) -> Result<PathBuf, TrendError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let body = serde_json::to_string_pretty(result)?;

        let path = self.dir.join(Self::snapshot_name(result));
        tokio::fs::write(&path, &body).await?;
        tokio::fs::write(self.latest_path(), &body).await?;

        tracing::info!(path = %path.display(), "saved trend snapshot");
        Ok(path)
    }

    /// Read `latest.json`, or `None` if no run has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Io`] on read failures other than a missing
    /// file, and [`TrendError::Deserialize`] if the document is malformed.
    pub async fn load_latest(&self) -> Result<Option<AggregatedResult>, TrendError> {
        match tokio::fs::read_to_string(self.latest_path()).await {
            Ok(body) => parse_document(&body, LATEST_FILE).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Read a document from an arbitrary path.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Io`] if the file cannot be read, or
    /// [`TrendError::Deserialize`] if the document is malformed.
    pub async fn load(&self, path: &Path) -> Result<AggregatedResult, TrendError> {
        let body = tokio::fs::read_to_string(path).await?;
        parse_document(&body, &path.display().to_string())
    }

    /// Timestamped snapshots in the store, newest first.
    ///
    /// A missing directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Io`] if the directory cannot be listed.
    pub async fn list_history(&self) -> Result<Vec<PathBuf>, TrendError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut snapshots = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with(SNAPSHOT_PREFIX)
                && Path::new(name)
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            {
                snapshots.push(entry.path());
            }
        }

        // The timestamp format sorts lexically.
        snapshots.sort();
        snapshots.reverse();
        Ok(snapshots)
    }
}

fn parse_document(body: &str, context: &str) -> Result<AggregatedResult, TrendError> {
    serde_json::from_str(body).map_err(|e| TrendError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::types::{
        HackerNewsTrends, KeywordCount, PlatformSlot, RedditTrends, SearchInterestTrends,
        VideoTrends,
    };

    fn result_at(secs: i64) -> AggregatedResult {
        AggregatedResult {
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
            youtube: PlatformSlot::Failed {
                error: "youtube is not configured".to_string(),
            },
            reddit: PlatformSlot::Ready(RedditTrends {
                posts: Vec::new(),
                total_posts: 0,
                subreddits_analyzed: vec!["technology".to_string()],
                top_keywords: vec![KeywordCount {
                    keyword: "café".to_string(),
                    count: 2,
                }],
                top_hashtags: Vec::new(),
            }),
            hackernews: PlatformSlot::Ready(HackerNewsTrends {
                stories: Vec::new(),
                total_stories: 0,
                top_keywords: Vec::new(),
            }),
            google_trends: PlatformSlot::Ready(SearchInterestTrends {
                trends: Vec::new(),
                queries_analyzed: Vec::new(),
            }),
            global_keywords: Vec::new(),
            global_hashtags: Vec::new(),
        }
    }

    #[test]
    fn snapshot_name_uses_result_timestamp() {
        // 2025-01-02T03:04:05Z
        let result = result_at(1_735_787_045);
        assert_eq!(
            SnapshotStore::snapshot_name(&result),
            "trends_20250102_030405.json"
        );
    }

    #[tokio::test]
    async fn save_writes_snapshot_and_latest() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("processed"));
        let result = result_at(1_735_787_045);

        let path = store.save(&result).await.unwrap();
        assert!(path.ends_with("trends_20250102_030405.json"));
        assert!(store.latest_path().exists());

        let loaded = store.load(&path).await.unwrap();
        assert_eq!(loaded, result);
        let latest = store.load_latest().await.unwrap();
        assert_eq!(latest, Some(result));
    }

    #[tokio::test]
    async fn saved_document_keeps_non_ascii_text() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        let path = store.save(&result_at(0)).await.unwrap();
        let body = std::fs::read_to_string(path).unwrap();
        assert!(body.contains("café"));
        assert!(body.contains("\n  \"youtube\""));
    }

    #[tokio::test]
    async fn load_latest_without_runs_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("missing"));
        assert!(store.load_latest().await.unwrap().is_none());
        assert!(store.list_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_latest_is_deserialize_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        std::fs::write(store.latest_path(), "{not json").unwrap();
        let err = store.load_latest().await.unwrap_err();
        assert!(matches!(err, TrendError::Deserialize { .. }));
    }

    #[tokio::test]
    async fn history_is_newest_first_and_skips_latest() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        store.save(&result_at(1_735_787_045)).await.unwrap();
        store.save(&result_at(1_735_873_445)).await.unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let history = store.list_history().await.unwrap();
        let names: Vec<String> = history
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "trends_20250103_030405.json".to_string(),
                "trends_20250102_030405.json".to_string(),
            ]
        );
    }
}
