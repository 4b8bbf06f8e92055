//! Robots.txt handling module
//!
//! [`RobotsFetcher`] retrieves `{base}/robots.txt` once and turns every
//! non-blank line into a [`RobotsRecord`]. A missing or unreachable file
//! yields zero records; it never fails the run.

mod parser;

pub use parser::{parse_robots, Directive, Effect, DIRECTIVES};

use crate::console::Console;
use crate::fetch::{fetch_resource, trim_base, FetchOutcome};
use crate::output::{robots_path, write_csv, ExportResult, RobotsRecord};
use crate::FetchResult;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;

/// Fetches and parses one robots.txt
pub struct RobotsFetcher {
    client: Client,
    console: Arc<Console>,
    collection: Vec<RobotsRecord>,
}

impl RobotsFetcher {
    /// Creates a fetcher with an empty record collection
    ///
    /// # Arguments
    ///
    /// * `client` - The shared HTTP client
    /// * `console` - Status line writer
    pub fn new(client: Client, console: Arc<Console>) -> Self {
        Self {
            client,
            console,
            collection: Vec::new(),
        }
    }

    /// URL of the robots.txt for a base URL
    pub fn robots_url(base_url: &str) -> String {
        format!("{}/robots.txt", trim_base(base_url))
    }

    /// Fetches `{base}/robots.txt` and appends its records
    ///
    /// Timeouts, transport errors and undecodable bodies are logged and
    /// produce no records.
    ///
    /// # Returns
    ///
    /// The number of records added by this call
    pub async fn fetch(&mut self, base_url: &str) -> usize {
        let base_url = trim_base(base_url);
        let url = Self::robots_url(base_url);

        match self.fetch_records(&url, base_url).await {
            Ok(records) => {
                let count = records.len();
                tracing::info!("Extracted {} records from {}", count, url);
                self.collection.extend(records);
                count
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", e.url(), e);
                self.console.failed(&url, &e.to_string());
                0
            }
        }
    }

    async fn fetch_records(&self, url: &str, base_url: &str) -> FetchResult<Vec<RobotsRecord>> {
        self.console.checking(url);

        match fetch_resource(&self.client, url).await? {
            FetchOutcome::Found { url, text } => {
                self.console.found(&url);
                Ok(parse_robots(&text, base_url))
            }
            FetchOutcome::NotFound { url, status_code } => {
                tracing::info!("{} returned HTTP {}", url, status_code);
                self.console.not_found(&url);
                Ok(Vec::new())
            }
        }
    }

    /// Records collected so far, in discovery order
    pub fn records(&self) -> &[RobotsRecord] {
        &self.collection
    }

    pub fn into_records(self) -> Vec<RobotsRecord> {
        self.collection
    }

    /// Writes the collection to `{stem}-robots.csv`
    ///
    /// # Returns
    ///
    /// The path written
    pub fn export(&self, stem: &str) -> ExportResult<PathBuf> {
        let path = robots_path(stem);
        write_csv(&path, &self.collection)?;
        Ok(path)
    }
}
