//! Command handlers for the CLI.

use std::path::Path;

use trendboard_core::AppConfig;
use trendboard_trends::{
    aggregate_all, render_markdown, run_and_store, summarize, AggregatedResult, HttpFeeds,
    SnapshotStore,
};

use crate::CollectArgs;

/// Keywords echoed after a successful collect.
const ECHO_KEYWORDS: usize = 10;

/// Run one aggregation across all platforms.
///
/// Platform failures never fail the command; they show up as `{error}`
/// slots in the stored document and in the printed summary.
///
/// When `dry_run` is set the document is printed as JSON and nothing is
/// written to the data directory.
///
/// # Errors
///
/// Returns an error if the HTTP clients cannot be built or the snapshot
/// cannot be written.
pub(crate) async fn run_collect(config: &AppConfig, args: &CollectArgs) -> anyhow::Result<()> {
    let queries = args.apply(config.queries.clone());
    let feeds = HttpFeeds::from_config(config)?;

    if args.dry_run {
        let result = aggregate_all(&feeds, &queries).await;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let store = SnapshotStore::from_config(config);
    let (result, path) = run_and_store(&feeds, &queries, &store).await?;

    println!("saved {}", path.display());
    let failed = result.failed_platforms();
    if !failed.is_empty() {
        let names: Vec<&str> = failed.iter().map(|p| p.as_str()).collect();
        println!("unavailable: {}", names.join(", "));
    }
    let keywords: Vec<String> = result
        .global_keywords
        .iter()
        .take(ECHO_KEYWORDS)
        .map(|k| format!("{} ({})", k.keyword, k.count))
        .collect();
    if keywords.is_empty() {
        println!("no keywords collected");
    } else {
        println!("top keywords: {}", keywords.join(", "));
    }

    Ok(())
}

/// Print a markdown report for the latest snapshot or the one at `path`.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or parsed.
pub(crate) async fn run_report(config: &AppConfig, path: Option<&Path>) -> anyhow::Result<()> {
    let store = SnapshotStore::from_config(config);
    let Some(result) = load(&store, path).await? else {
        println!("no snapshots found; run `trendboard collect` first");
        return Ok(());
    };
    print!("{}", render_markdown(&result));
    Ok(())
}

/// Print the top `top` entries of each ranking in the latest snapshot.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or parsed.
pub(crate) async fn run_summary(config: &AppConfig, top: usize) -> anyhow::Result<()> {
    let store = SnapshotStore::from_config(config);
    let Some(result) = store.load_latest().await? else {
        println!("no snapshots found; run `trendboard collect` first");
        return Ok(());
    };
    println!("{}", serde_json::to_string_pretty(&summarize(&result, top))?);
    Ok(())
}

/// List stored snapshots, newest first.
///
/// # Errors
///
/// Returns an error if the data directory cannot be listed.
pub(crate) async fn run_history(config: &AppConfig) -> anyhow::Result<()> {
    let store = SnapshotStore::from_config(config);
    let history = store.list_history().await?;

    if history.is_empty() {
        println!("no snapshots in {}", store.dir().display());
        return Ok(());
    }
    for path in &history {
        println!("{}", path.display());
    }
    Ok(())
}

async fn load(
    store: &SnapshotStore,
    path: Option<&Path>,
) -> anyhow::Result<Option<AggregatedResult>> {
    match path {
        Some(path) => Ok(Some(store.load(path).await?)),
        None => Ok(store.load_latest().await?),
    }
}
