//! Configuration module for Mapboy
//!
//! Every setting has a default, so a config file is optional. When one is
//! given it is parsed from TOML and validated before use; CLI flags are
//! applied on top by the caller.
//!
//! # Example
//!
//! ```no_run
//! use mapboy::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("mapboy.toml")).unwrap();
//! println!("Sitemap fetches in flight: {}", config.fetch.max_concurrent);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetchConfig, OutputConfig, DEFAULT_MAX_CONCURRENT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, DEFAULT_WILDCARDS_PATH,
};

// Re-export parser functions
pub use parser::{load_config, load_optional_config};
pub use validation::validate;
