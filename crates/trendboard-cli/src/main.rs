mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use trendboard_core::PlatformQueries;

#[derive(Debug, Parser)]
#[command(name = "trendboard")]
#[command(about = "Cross-platform trending keyword aggregator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Poll every platform once and store the aggregated result
    Collect(CollectArgs),
    /// Render the latest (or a given) snapshot as a markdown report
    Report {
        /// Snapshot file to render instead of `latest.json`
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Print the top items of the latest snapshot as JSON
    Summary {
        /// Entries to keep per ranking
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
    /// List stored snapshots, newest first
    History,
}

/// Per-run overrides of the configured platform queries.
#[derive(Debug, Default, Args)]
struct CollectArgs {
    /// YouTube region code for the trending chart
    #[arg(long)]
    youtube_region: Option<String>,

    /// Trending videos to request
    #[arg(long)]
    youtube_limit: Option<u32>,

    /// Subreddit to poll; repeat to poll several
    #[arg(long = "subreddit")]
    subreddits: Vec<String>,

    /// Hot posts to request per subreddit
    #[arg(long)]
    reddit_limit: Option<u32>,

    /// Top stories to request from Hacker News
    #[arg(long)]
    hn_limit: Option<u32>,

    /// Search-interest query; repeat to track several
    #[arg(long = "query")]
    queries: Vec<String>,

    /// Print the result as JSON without writing a snapshot
    #[arg(long)]
    dry_run: bool,
}

impl CollectArgs {
    /// Flags win over configuration; repeated list flags replace the list.
    fn apply(&self, mut queries: PlatformQueries) -> PlatformQueries {
        if let Some(region) = &self.youtube_region {
            queries.youtube_region.clone_from(region);
        }
        if let Some(limit) = self.youtube_limit {
            queries.youtube_limit = limit;
        }
        if !self.subreddits.is_empty() {
            queries.subreddits.clone_from(&self.subreddits);
        }
        if let Some(limit) = self.reddit_limit {
            queries.reddit_limit = limit;
        }
        if let Some(limit) = self.hn_limit {
            queries.hn_limit = limit;
        }
        if !self.queries.is_empty() {
            queries.google_queries.clone_from(&self.queries);
        }
        queries
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = trendboard_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout carries command output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Collect(args) => commands::run_collect(&config, &args).await,
        Commands::Report { path } => commands::run_report(&config, path.as_deref()).await,
        Commands::Summary { top } => commands::run_summary(&config, top).await,
        Commands::History => commands::run_history(&config).await,
    }
}
