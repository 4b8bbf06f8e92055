//! Mapboy main entry point
//!
//! This is the command-line interface for the Mapboy path discoverer.

use clap::Parser;
use dialoguer::Input;
use mapboy::config::{load_optional_config, validate};
use mapboy::{run, Console, Mode, RunOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Mapboy: robots.txt and sitemap path discovery
///
/// Fetches a site's robots.txt and common sitemap locations, extracts the
/// paths and URLs they list, and writes them to CSV.
#[derive(Parser, Debug)]
#[command(name = "mapboy")]
#[command(version)]
#[command(about = "Discover crawlable and disallowed paths from robots.txt and sitemaps", long_about = None)]
struct Cli {
    /// URL to extract information from (prompted for when omitted)
    #[arg(short, long)]
    url: Option<String>,

    /// File you would like to output to
    #[arg(short, long, default_value = "mapboy.csv")]
    output: String,

    /// Only scan for robots.txt files
    #[arg(short, long)]
    robots: bool,

    /// Only scan for sitemap xml
    #[arg(short, long)]
    sitemap: bool,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also fetch sitemaps listed inside sitemap index files
    #[arg(long)]
    follow_index: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Maximum sitemap fetches in flight
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,

    /// Disable colored status output
    #[arg(long)]
    no_color: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress status output and non-error logs
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let console = Arc::new(Console::new(!cli.no_color, cli.quiet));
    if !cli.no_banner {
        console.banner();
    }

    let mut config = match load_optional_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Command-line flags win over the config file
    if let Some(timeout) = cli.timeout {
        config.fetch.timeout_secs = timeout;
    }
    if let Some(concurrency) = cli.concurrency {
        config.fetch.max_concurrent = concurrency;
    }
    if cli.follow_index {
        config.fetch.follow_index = true;
    }
    validate(&config)?;

    let url = match cli.url {
        Some(url) => url,
        None => Input::<String>::new()
            .with_prompt("Scan URL")
            .interact_text()?,
    };
    console.rule();

    let options = RunOptions {
        url,
        output: cli.output,
        mode: Mode::from_flags(cli.robots, cli.sitemap),
    };

    match run(&options, &config, console).await {
        Ok(summary) => {
            tracing::info!(
                "Done: {} robots records, {} sitemap records, {} files, {} wildcards",
                summary.robots_records,
                summary.sitemap_records,
                summary.files.len(),
                summary.wildcards
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("mapboy=warn"),
            1 => EnvFilter::new("mapboy=info,warn"),
            2 => EnvFilter::new("mapboy=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
