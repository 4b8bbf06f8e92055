//! Mapboy: robots.txt and sitemap path discovery
//!
//! This crate fetches a site's `robots.txt` and a fixed list of conventional
//! sitemap locations, extracts the paths and URLs they mention, and exports
//! the results as CSV.

pub mod config;
pub mod console;
pub mod fetch;
pub mod orchestrator;
pub mod output;
pub mod robots;
pub mod sitemap;

use thiserror::Error;

/// Main error type for Mapboy operations
#[derive(Debug, Error)]
pub enum MapboyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Export error: {0}")]
    Export(#[from] output::ExportError),

    #[error("Invalid target URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Fetcher task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Per-resource fetch failures
///
/// These never abort a run. The fetchers log them with the failing URL and
/// treat the resource as having produced zero records.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Failed to decode body of {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    /// Returns the URL the failure belongs to
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Timeout { url } | Self::Decode { url, .. } => url,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Mapboy operations
pub type Result<T> = std::result::Result<T, MapboyError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for single-resource fetches
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use console::Console;
pub use orchestrator::{run, Mode, RunOptions, RunSummary};
pub use output::{OutputRow, Permission, RobotsRecord, SitemapRecord};
pub use robots::RobotsFetcher;
pub use sitemap::SitemapFetcher;
