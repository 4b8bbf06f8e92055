//! Sitemap discovery module
//!
//! [`SitemapFetcher`] probes a fixed list of conventional sitemap locations
//! concurrently behind an [`AdmissionGate`], unpacks gzip bodies, and turns
//! qualifying lines into [`SitemapRecord`]s. A failing candidate never
//! affects its siblings.

mod parser;

pub use parser::{extract_sitemap_urls, is_sitemap_link, parse_sitemap};

use crate::config::FetchConfig;
use crate::console::Console;
use crate::fetch::{fetch_resource, trim_base, AdmissionGate, FetchOutcome};
use crate::output::{sitemap_path, write_csv, ExportResult, SitemapRecord};
use crate::FetchResult;
use chrono::{DateTime, Local, TimeZone};
use reqwest::Client;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinError;

/// Conventional sitemap locations, relative to the site base
pub const CANDIDATE_PATHS: [&str; 14] = [
    "sitemap.xml",
    "sitemap.xml.gz",
    "sitemap_index.xml",
    "sitemap-index.xml",
    "sitemap_index.xml.gz",
    "sitemap-index.xml.gz",
    ".sitemap.xml",
    "sitemap",
    "admin/config/search/xmlsitemap",
    "sitemap/sitemap-index.xml",
    "sitemap_news.xml",
    "sitemap-news.xml",
    "sitemap_news.xml.gz",
    "sitemap-news.xml.gz",
];

/// Fetches sitemap candidates and collects their URL lines
pub struct SitemapFetcher {
    client: Client,
    console: Arc<Console>,
    gate: AdmissionGate,
    follow_index: bool,
    collection: Vec<SitemapRecord>,
}

impl SitemapFetcher {
    /// Creates a fetcher with an empty record collection
    ///
    /// # Arguments
    ///
    /// * `client` - The shared HTTP client
    /// * `console` - Status line writer
    /// * `config` - Supplies the concurrency limit and index following switch
    pub fn new(client: Client, console: Arc<Console>, config: &FetchConfig) -> Self {
        Self {
            client,
            console,
            gate: AdmissionGate::new(config.max_concurrent),
            follow_index: config.follow_index,
            collection: Vec::new(),
        }
    }

    /// Full candidate URLs for a base URL
    pub fn candidate_urls(base_url: &str) -> Vec<String> {
        let base_url = trim_base(base_url);
        CANDIDATE_PATHS
            .iter()
            .map(|path| format!("{}/{}", base_url, path))
            .collect()
    }

    /// Probes every candidate path under `base_url`
    ///
    /// Records are appended in candidate order, then line order, whatever
    /// order the requests finish in. With index following enabled, sitemap
    /// files listed in the results are fetched once more (one level) and
    /// their records appended after.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Records added by this call
    /// * `Err(JoinError)` - A fetch task panicked
    pub async fn iterate(&mut self, base_url: &str) -> Result<usize, JoinError> {
        let candidates = Self::candidate_urls(base_url);
        let start = self.collection.len();

        let batches = self.fetch_all(candidates.clone()).await?;
        self.collection.extend(batches.into_iter().flatten());

        if self.follow_index {
            let mut seen: HashSet<String> = candidates.into_iter().collect();
            let nested: Vec<String> = self.collection[start..]
                .iter()
                .map(|record| record.extracted_url.clone())
                .filter(|url| is_sitemap_link(url) && seen.insert(url.clone()))
                .collect();

            if !nested.is_empty() {
                tracing::info!("Following {} sitemaps listed in index files", nested.len());
                let batches = self.fetch_all(nested).await?;
                self.collection.extend(batches.into_iter().flatten());
            }
        }

        let added = self.collection.len() - start;
        tracing::info!("Extracted {} sitemap records under {}", added, base_url);
        Ok(added)
    }

    /// Fetches a single sitemap URL and appends its records
    pub async fn parse(&mut self, url: &str) -> usize {
        let records = fetch_sitemap(self.client.clone(), self.console.clone(), url.to_string()).await;
        let count = records.len();
        self.collection.extend(records);
        count
    }

    async fn fetch_all(&self, urls: Vec<String>) -> Result<Vec<Vec<SitemapRecord>>, JoinError> {
        tracing::debug!("Fetching {} sitemaps, {} at a time", urls.len(), self.gate.limit());
        let client = self.client.clone();
        let console = self.console.clone();
        self.gate
            .run_all(urls, move |url| fetch_sitemap(client.clone(), console.clone(), url))
            .await
    }

    /// Records collected so far
    pub fn records(&self) -> &[SitemapRecord] {
        &self.collection
    }

    pub fn into_records(self) -> Vec<SitemapRecord> {
        self.collection
    }

    /// Writes the collection to `{stem}_{YYYYMMDD-HHMMSS}.csv` (local time)
    pub fn export(&self, stem: &str) -> ExportResult<PathBuf> {
        self.export_at(stem, &Local::now())
    }

    /// Like [`export`](Self::export) with an explicit timestamp
    pub fn export_at<Tz>(&self, stem: &str, now: &DateTime<Tz>) -> ExportResult<PathBuf>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let path = sitemap_path(stem, now);
        write_csv(&path, &self.collection)?;
        Ok(path)
    }
}

/// Fetches one sitemap URL, degrading every failure to zero records
async fn fetch_sitemap(client: Client, console: Arc<Console>, url: String) -> Vec<SitemapRecord> {
    match fetch_sitemap_records(&client, &console, &url).await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Skipping {}: {}", e.url(), e);
            console.failed(&url, &e.to_string());
            Vec::new()
        }
    }
}

async fn fetch_sitemap_records(
    client: &Client,
    console: &Console,
    url: &str,
) -> FetchResult<Vec<SitemapRecord>> {
    console.checking(url);

    match fetch_resource(client, url).await? {
        FetchOutcome::Found { url, text } => {
            console.found(&url);
            let records = parse_sitemap(&text, &url);
            tracing::debug!("{} yielded {} records", url, records.len());
            Ok(records)
        }
        FetchOutcome::NotFound { url, status_code } => {
            tracing::debug!("{} returned HTTP {}", url, status_code);
            console.not_found(&url);
            Ok(Vec::new())
        }
    }
}
