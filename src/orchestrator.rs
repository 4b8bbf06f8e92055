//! Run orchestration
//!
//! Picks the fetcher(s) for the selected [`Mode`], runs them, and writes the
//! output files. Export failures are logged and the run carries on; only a
//! bad target URL, an HTTP client that cannot be built, or a panicked task
//! ends the run with an error.

use crate::config::Config;
use crate::console::Console;
use crate::fetch::{build_http_client, trim_base};
use crate::output::{
    append_wildcards, combined_path, merge, output_stem, wildcard_paths, write_csv,
    ExportResult,
};
use crate::robots::RobotsFetcher;
use crate::sitemap::SitemapFetcher;
use crate::{MapboyError, Result};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

/// Which fetchers a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// robots.txt only, exported to `{output}-robots.csv`
    RobotsOnly,
    /// Sitemap candidates only, exported to `{output}_{timestamp}.csv`
    SitemapOnly,
    /// Both, merged into `{output}.csv`, wildcards appended to the side file
    Combined,
    /// `--robots` and `--sitemap` together: nothing is fetched or written
    Idle,
}

impl Mode {
    /// Resolves the mode from the `--robots` and `--sitemap` flags
    ///
    /// The two flags are exclusive. Giving both selects [`Mode::Idle`].
    pub fn from_flags(robots: bool, sitemap: bool) -> Self {
        match (robots, sitemap) {
            (true, false) => Self::RobotsOnly,
            (false, true) => Self::SitemapOnly,
            (true, true) => {
                tracing::warn!("--robots and --sitemap are exclusive; nothing will be scanned");
                Self::Idle
            }
            (false, false) => Self::Combined,
        }
    }
}

/// Inputs for one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Target site base URL
    pub url: String,
    /// Output base name as given on the command line
    pub output: String,
    pub mode: Mode,
}

/// What a run produced
#[derive(Debug, Default)]
pub struct RunSummary {
    pub robots_records: usize,
    pub sitemap_records: usize,
    /// CSV files successfully written
    pub files: Vec<PathBuf>,
    /// Lines appended to the wildcard file
    pub wildcards: usize,
}

/// Validates the target URL and drops one trailing slash
///
/// # Example
///
/// ```
/// use mapboy::orchestrator::normalize_base_url;
///
/// assert_eq!(normalize_base_url("https://example.com/").unwrap(), "https://example.com");
/// assert!(normalize_base_url("example.com").is_err());
/// ```
pub fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim();
    let parsed =
        Url::parse(url).map_err(|e| MapboyError::InvalidUrl(format!("{}: {}", url, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(MapboyError::InvalidUrl(format!(
            "{}: only http and https are supported",
            url
        )));
    }

    Ok(trim_base(url).to_string())
}

/// Runs one discovery pass
///
/// # Arguments
///
/// * `options` - Target URL, output name and mode
/// * `config` - Fetch and output settings
/// * `console` - Status line writer shared by all fetches
///
/// # Returns
///
/// * `Ok(RunSummary)` - Counts and the files written
/// * `Err(MapboyError)` - The run could not start or a fetcher task panicked
///
/// # Example
///
/// ```no_run
/// use mapboy::{run, Config, Console, Mode, RunOptions};
/// use std::sync::Arc;
///
/// # async fn example() -> mapboy::Result<()> {
/// let options = RunOptions {
///     url: "https://example.com".to_string(),
///     output: "mapboy.csv".to_string(),
///     mode: Mode::Combined,
/// };
/// let summary = run(&options, &Config::default(), Arc::new(Console::default())).await?;
/// println!("{} files written", summary.files.len());
/// # Ok(())
/// # }
/// ```
pub async fn run(options: &RunOptions, config: &Config, console: Arc<Console>) -> Result<RunSummary> {
    let base_url = normalize_base_url(&options.url)?;
    let stem = output_stem(&options.output);
    let client = build_http_client(&config.fetch)?;

    tracing::info!("Scanning {} ({:?})", base_url, options.mode);

    match options.mode {
        Mode::RobotsOnly => Ok(run_robots(client, console, &base_url, &stem).await),
        Mode::SitemapOnly => run_sitemaps(client, console, config, &base_url, &stem).await,
        Mode::Combined => run_combined(client, console, config, &base_url, &stem).await,
        Mode::Idle => {
            tracing::warn!("No fetcher selected for {}", base_url);
            Ok(RunSummary::default())
        }
    }
}

async fn run_robots(client: Client, console: Arc<Console>, base_url: &str, stem: &str) -> RunSummary {
    let mut fetcher = RobotsFetcher::new(client, console.clone());
    let mut summary = RunSummary {
        robots_records: fetcher.fetch(base_url).await,
        ..RunSummary::default()
    };

    record_export(&mut summary, &console, fetcher.export(stem), fetcher.records().len());
    summary
}

async fn run_sitemaps(
    client: Client,
    console: Arc<Console>,
    config: &Config,
    base_url: &str,
    stem: &str,
) -> Result<RunSummary> {
    let mut fetcher = SitemapFetcher::new(client, console.clone(), &config.fetch);
    let mut summary = RunSummary {
        sitemap_records: fetcher.iterate(base_url).await?,
        ..RunSummary::default()
    };

    record_export(&mut summary, &console, fetcher.export(stem), fetcher.records().len());
    Ok(summary)
}

async fn run_combined(
    client: Client,
    console: Arc<Console>,
    config: &Config,
    base_url: &str,
    stem: &str,
) -> Result<RunSummary> {
    let robots_task = {
        let mut fetcher = RobotsFetcher::new(client.clone(), console.clone());
        let base_url = base_url.to_string();
        tokio::spawn(async move {
            fetcher.fetch(&base_url).await;
            fetcher
        })
    };

    let sitemap_task = {
        let mut fetcher = SitemapFetcher::new(client, console.clone(), &config.fetch);
        let base_url = base_url.to_string();
        tokio::spawn(async move { fetcher.iterate(&base_url).await.map(|_| fetcher) })
    };

    let (robots, sitemaps) = tokio::join!(robots_task, sitemap_task);
    let robots = robots?.into_records();
    let sitemaps = sitemaps??.into_records();

    let mut summary = RunSummary {
        robots_records: robots.len(),
        sitemap_records: sitemaps.len(),
        ..RunSummary::default()
    };

    let rows = merge(robots, sitemaps);
    let path = combined_path(stem);
    let written = write_csv(&path, &rows).map(|_| path);
    record_export(&mut summary, &console, written, rows.len());

    let wildcards = wildcard_paths(&rows, base_url);
    let wildcards_path = Path::new(&config.output.wildcards_path);
    match append_wildcards(wildcards_path, &wildcards) {
        Ok(count) => {
            if count > 0 {
                tracing::info!("Appended {} wildcard paths to {}", count, wildcards_path.display());
            }
            summary.wildcards = count;
        }
        Err(e) => tracing::error!("Failed to append to {}: {}", wildcards_path.display(), e),
    }

    Ok(summary)
}

fn record_export(
    summary: &mut RunSummary,
    console: &Console,
    result: ExportResult<PathBuf>,
    rows: usize,
) {
    match result {
        Ok(path) => {
            tracing::info!("Exported {} rows to {}", rows, path.display());
            console.wrote(&path.display().to_string(), rows);
            summary.files.push(path);
        }
        Err(e) => tracing::error!("Export failed: {}", e),
    }
}
