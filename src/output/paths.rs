//! Output file naming
//!
//! The `-o` value is a base name; every `.csv` in it is dropped and each
//! mode appends its own suffix.

use chrono::{DateTime, TimeZone};
use std::path::PathBuf;

/// Strips every `.csv` occurrence from the user-supplied output name
pub fn output_stem(output: &str) -> String {
    output.replace(".csv", "")
}

/// `{stem}.csv`, used by the combined mode
pub fn combined_path(stem: &str) -> PathBuf {
    PathBuf::from(format!("{}.csv", stem))
}

/// `{stem}-robots.csv`, used by the robots-only mode
pub fn robots_path(stem: &str) -> PathBuf {
    PathBuf::from(format!("{}-robots.csv", stem))
}

/// `{stem}_{YYYYMMDD-HHMMSS}.csv`, used by the sitemap-only mode
///
/// Hours are on the 12-hour clock with no AM/PM marker.
pub fn sitemap_path<Tz>(stem: &str, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!("{}_{}.csv", stem, now.format("%Y%m%d-%I%M%S")))
}
