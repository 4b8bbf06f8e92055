//! CSV export
//!
//! Rows are written to a `.partial` file next to the destination and moved
//! into place once complete, so a failed export never leaves a truncated CSV.

use crate::output::records::{OutputRow, RobotsRecord, SitemapRecord};
use crate::output::ExportResult;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A record shape with a fixed CSV header
pub trait Tabular: Serialize {
    const HEADERS: &'static [&'static str];
}

impl Tabular for RobotsRecord {
    const HEADERS: &'static [&'static str] =
        &["Extractor", "UserAgent", "Permission", "Original", "ExtractedUrl"];
}

impl Tabular for SitemapRecord {
    const HEADERS: &'static [&'static str] = &["Extractor", "Sitemap", "ExtractedUrl"];
}

impl Tabular for OutputRow {
    const HEADERS: &'static [&'static str] = &[
        "Extractor",
        "UserAgent",
        "Permission",
        "Original",
        "ExtractedUrl",
        "Sitemap",
    ];
}

/// Writes rows to a CSV file, replacing any existing file
///
/// The header row is always written, so an empty collection still yields a
/// valid file. On failure the destination is left untouched.
///
/// # Arguments
///
/// * `path` - Destination file
/// * `rows` - Records to write, in order
///
/// # Returns
///
/// * `Ok(usize)` - Number of data rows written
/// * `Err(ExportError)` - Failed to create or write the file
pub fn write_csv<R: Tabular>(path: &Path, rows: &[R]) -> ExportResult<usize> {
    let partial = partial_path(path);

    let result = write_rows(&partial, rows).and_then(|count| {
        fs::rename(&partial, path)?;
        Ok(count)
    });
    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }

    result
}

fn write_rows<R: Tabular>(path: &Path, rows: &[R]) -> ExportResult<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(R::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(rows.len())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}
