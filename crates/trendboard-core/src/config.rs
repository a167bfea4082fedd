use crate::app_config::{AppConfig, PlatformQueries};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let defaults = PlatformQueries::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u32 = |var: &str, default: u32| -> Result<u32, ConfigError> {
        let raw = or_default(var, &default.to_string());
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_list = |var: &str, default: &[String]| -> Result<Vec<String>, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(default.to_vec());
        };
        let items = split_list(&raw);
        if items.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "expected a non-empty comma-separated list".to_string(),
            });
        }
        Ok(items)
    };

    let youtube_api_key = optional("YOUTUBE_API_KEY");
    let serpapi_key = optional("SERPAPI_KEY");

    let data_dir = PathBuf::from(or_default("TRENDBOARD_DATA_DIR", "data"));
    let log_level = or_default("TRENDBOARD_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("TRENDBOARD_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "TRENDBOARD_USER_AGENT",
        "trendboard/0.1 (trend-aggregation)",
    );

    let queries = PlatformQueries {
        youtube_region: or_default("TRENDBOARD_YOUTUBE_REGION", &defaults.youtube_region),
        youtube_limit: parse_u32("TRENDBOARD_YOUTUBE_LIMIT", defaults.youtube_limit)?,
        subreddits: parse_list("TRENDBOARD_REDDIT_SUBREDDITS", &defaults.subreddits)?,
        reddit_limit: parse_u32("TRENDBOARD_REDDIT_LIMIT", defaults.reddit_limit)?,
        hn_limit: parse_u32("TRENDBOARD_HN_LIMIT", defaults.hn_limit)?,
        google_queries: parse_list("TRENDBOARD_GOOGLE_QUERIES", &defaults.google_queries)?,
    };

    Ok(AppConfig {
        youtube_api_key,
        serpapi_key,
        data_dir,
        log_level,
        request_timeout_secs,
        user_agent,
        queries,
    })
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert!(cfg.youtube_api_key.is_none());
        assert!(cfg.serpapi_key.is_none());
        assert_eq!(cfg.data_dir.to_str(), Some("data"));
        assert_eq!(cfg.processed_dir(), std::path::Path::new("data/processed"));
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "trendboard/0.1 (trend-aggregation)");
        assert_eq!(cfg.queries, PlatformQueries::default());
    }

    #[test]
    fn api_keys_are_read_and_blank_keys_ignored() {
        let mut map = HashMap::new();
        map.insert("YOUTUBE_API_KEY", "yt-key");
        map.insert("SERPAPI_KEY", "   ");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.youtube_api_key.as_deref(), Some("yt-key"));
        assert!(cfg.serpapi_key.is_none());
    }

    #[test]
    fn debug_output_redacts_api_keys() {
        let mut map = HashMap::new();
        map.insert("YOUTUBE_API_KEY", "super-secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[redacted]"));
    }

    #[test]
    fn request_timeout_override() {
        let mut map = HashMap::new();
        map.insert("TRENDBOARD_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn request_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("TRENDBOARD_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRENDBOARD_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(TRENDBOARD_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn reddit_limit_invalid() {
        let mut map = HashMap::new();
        map.insert("TRENDBOARD_REDDIT_LIMIT", "-5");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRENDBOARD_REDDIT_LIMIT"),
            "expected InvalidEnvVar(TRENDBOARD_REDDIT_LIMIT), got: {result:?}"
        );
    }

    #[test]
    fn subreddit_list_is_split_and_trimmed() {
        let mut map = HashMap::new();
        map.insert("TRENDBOARD_REDDIT_SUBREDDITS", " rust, golang ,,python ");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.queries.subreddits, vec!["rust", "golang", "python"]);
    }

    #[test]
    fn empty_query_list_is_rejected() {
        let mut map = HashMap::new();
        map.insert("TRENDBOARD_GOOGLE_QUERIES", " , ");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRENDBOARD_GOOGLE_QUERIES"),
            "expected InvalidEnvVar(TRENDBOARD_GOOGLE_QUERIES), got: {result:?}"
        );
    }

    #[test]
    fn youtube_overrides() {
        let mut map = HashMap::new();
        map.insert("TRENDBOARD_YOUTUBE_REGION", "GB");
        map.insert("TRENDBOARD_YOUTUBE_LIMIT", "50");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.queries.youtube_region, "GB");
        assert_eq!(cfg.queries.youtube_limit, 50);
    }
}
