use serde::Deserialize;
use std::time::Duration;

/// Per-request deadline applied to every fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Sitemap candidates allowed in flight at once
pub const DEFAULT_MAX_CONCURRENT: usize = 5;

pub const DEFAULT_USER_AGENT: &str = concat!("mapboy/", env!("CARGO_PKG_VERSION"));

/// Side file that collects wildcard paths in combined mode
pub const DEFAULT_WILDCARDS_PATH: &str = "wildcards.txt";

/// Main configuration structure for Mapboy
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP fetch behavior
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of sitemap fetches in flight
    #[serde(rename = "max-concurrent", default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Fetch sitemaps listed inside sitemap index files (one level deep)
    #[serde(rename = "follow-index", default)]
    pub follow_index: bool,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            follow_index: false,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the file wildcard paths are appended to
    #[serde(rename = "wildcards-path", default = "default_wildcards_path")]
    pub wildcards_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            wildcards_path: DEFAULT_WILDCARDS_PATH.to_string(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_concurrent() -> usize {
    DEFAULT_MAX_CONCURRENT
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_wildcards_path() -> String {
    DEFAULT_WILDCARDS_PATH.to_string()
}
