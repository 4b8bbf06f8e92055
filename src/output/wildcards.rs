//! Wildcard side file
//!
//! Extracted URLs containing `*` are appended, relative to the target site,
//! to a plain text file that accumulates across runs.

use crate::output::records::OutputRow;
use crate::output::ExportResult;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Collects the extracted URLs containing `*`, relative to `base_url`
///
/// A leading `{base_url}/` is stripped; anything else is kept verbatim.
pub fn wildcard_paths(rows: &[OutputRow], base_url: &str) -> Vec<String> {
    let prefix = format!("{}/", base_url);
    rows.iter()
        .filter(|row| row.extracted_url.contains('*'))
        .map(|row| {
            row.extracted_url
                .strip_prefix(&prefix)
                .unwrap_or(&row.extracted_url)
                .to_string()
        })
        .collect()
}

/// Appends one line per path to the wildcard file
///
/// The file is created on first use and never truncated. Nothing is touched
/// when `paths` is empty.
pub fn append_wildcards(path: &Path, paths: &[String]) -> ExportResult<usize> {
    if paths.is_empty() {
        return Ok(0);
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for line in paths {
        writeln!(file, "{}", line)?;
    }

    Ok(paths.len())
}
