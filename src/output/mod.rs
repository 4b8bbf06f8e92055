//! Output module for extracted records
//!
//! This module handles:
//! - The typed robots and sitemap record variants
//! - Merging both variants into one export schema
//! - CSV export and output file naming
//! - Appending wildcard paths to the side file

mod export;
mod paths;
mod records;
mod wildcards;

pub use export::{write_csv, Tabular};
pub use paths::{combined_path, output_stem, robots_path, sitemap_path};
pub use records::{merge, OutputRow, Permission, RobotsRecord, SitemapRecord, SourceKind};
pub use wildcards::{append_wildcards, wildcard_paths};

use thiserror::Error;

/// Errors that can occur while writing output files
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type ExportResult<T> = Result<T, ExportError>;
