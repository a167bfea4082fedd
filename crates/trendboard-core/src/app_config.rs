use std::path::PathBuf;

/// What to ask each platform for during one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformQueries {
    pub youtube_region: String,
    pub youtube_limit: u32,
    pub subreddits: Vec<String>,
    pub reddit_limit: u32,
    pub hn_limit: u32,
    pub google_queries: Vec<String>,
}

impl Default for PlatformQueries {
    fn default() -> Self {
        Self {
            youtube_region: "US".to_string(),
            youtube_limit: 25,
            subreddits: vec![
                "technology".to_string(),
                "programming".to_string(),
                "startups".to_string(),
            ],
            reddit_limit: 25,
            hn_limit: 30,
            google_queries: vec![
                "technology".to_string(),
                "AI".to_string(),
                "crypto".to_string(),
            ],
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub youtube_api_key: Option<String>,
    pub serpapi_key: Option<String>,
    pub data_dir: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub queries: PlatformQueries,
}

impl AppConfig {
    /// Directory holding processed snapshots (`trends_*.json`, `latest.json`).
    #[must_use]
    pub fn processed_dir(&self) -> PathBuf {
        self.data_dir.join("processed")
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "serpapi_key",
                &self.serpapi_key.as_ref().map(|_| "[redacted]"),
            )
            .field("data_dir", &self.data_dir)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("queries", &self.queries)
            .finish()
    }
}
